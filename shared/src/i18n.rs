//! Language selection and dotted-key string lookup over embedded tables.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Storage key holding the selected language tag.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    PtBr,
    Tr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::PtBr, Language::Tr];

    pub const fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::PtBr => "ptbr",
            Language::Tr => "tr",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|lang| lang.tag() == tag.trim())
    }

    /// Compact label for the toggle button.
    pub const fn short_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::PtBr => "PT",
            Language::Tr => "TR",
        }
    }

    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::PtBr => "Português (BR)",
            Language::Tr => "Türkçe",
        }
    }

    const fn index(self) -> usize {
        match self {
            Language::En => 0,
            Language::PtBr => 1,
            Language::Tr => 2,
        }
    }
}

static TABLES: OnceLock<[Value; 3]> = OnceLock::new();

fn tables() -> &'static [Value; 3] {
    TABLES.get_or_init(|| {
        [
            parse_table(include_str!("../lang/en.json")),
            parse_table(include_str!("../lang/ptbr.json")),
            parse_table(include_str!("../lang/tr.json")),
        ]
    })
}

fn parse_table(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or(Value::Null)
}

/// Descend `key` (e.g. `"leaderboards.title"`) through the language table.
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let mut node = &tables()[language.index()];
    for segment in key.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().filter(|s| !s.is_empty())
}

/// Display string for `key`, or the key itself when any segment is missing.
pub fn translate(language: Language, key: &str) -> String {
    lookup(language, key)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Key-value persistence for user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// Stored language, or the baseline language when absent or unknown.
pub fn load_language(store: &impl PreferenceStore) -> Language {
    store
        .read(LANGUAGE_STORAGE_KEY)
        .and_then(|tag| Language::from_tag(&tag))
        .unwrap_or_default()
}

pub fn save_language(store: &mut impl PreferenceStore, language: Language) {
    store.write(LANGUAGE_STORAGE_KEY, language.tag());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn write(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    fn leaf_keys(node: &Value, prefix: &str, out: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_keys(v, &path, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn all_tables_parse() {
        for table in tables() {
            assert!(table.is_object());
        }
    }

    #[test]
    fn every_key_resolves_in_every_language() {
        let mut keys = Vec::new();
        leaf_keys(&tables()[Language::En.index()], "", &mut keys);
        assert!(keys.len() > 50);
        for language in Language::ALL {
            for key in &keys {
                let text = lookup(language, key);
                assert!(
                    text.is_some_and(|t| !t.is_empty()),
                    "{} missing {key}",
                    language.tag()
                );
            }
        }
    }

    #[test]
    fn tables_share_the_same_key_set() {
        let mut reference = Vec::new();
        leaf_keys(&tables()[0], "", &mut reference);
        reference.sort();
        for language in [Language::PtBr, Language::Tr] {
            let mut keys = Vec::new();
            leaf_keys(&tables()[language.index()], "", &mut keys);
            keys.sort();
            assert_eq!(keys, reference, "{} key set differs", language.tag());
        }
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        for language in Language::ALL {
            assert_eq!(translate(language, "nope.missing"), "nope.missing");
            assert_eq!(translate(language, "leaderboards.title.extra"), "leaderboards.title.extra");
            assert_eq!(translate(language, ""), "");
        }
    }

    #[test]
    fn translations_differ_between_languages() {
        assert_eq!(translate(Language::En, "common.home"), "Home");
        assert_eq!(translate(Language::PtBr, "common.home"), "Início");
        assert_eq!(translate(Language::Tr, "common.home"), "Ana Sayfa");
    }

    #[test]
    fn language_choice_survives_reload() {
        let mut store = MemoryStore::default();
        assert_eq!(load_language(&store), Language::En);

        save_language(&mut store, Language::Tr);
        assert_eq!(store.read(LANGUAGE_STORAGE_KEY).as_deref(), Some("tr"));

        let reloaded = load_language(&store);
        assert_eq!(reloaded, Language::Tr);
    }

    #[test]
    fn unknown_stored_tag_uses_baseline() {
        let mut store = MemoryStore::default();
        store.write(LANGUAGE_STORAGE_KEY, "klingon");
        assert_eq!(load_language(&store), Language::En);
    }

    #[test]
    fn serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Language::PtBr).unwrap(), "\"ptbr\"");
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.tag()), Some(language));
        }
    }
}
