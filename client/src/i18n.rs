use gloo_storage::Storage;
use leptos::prelude::*;

use surf_shared::Language;
use surf_shared::PreferenceStore;
use surf_shared::i18n::{load_language, save_language, translate};

/// `PreferenceStore` over the browser's LocalStorage.
struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        gloo_storage::LocalStorage::get::<String>(key).ok()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = gloo_storage::LocalStorage::set(key, value) {
            web_sys::console::warn_1(&format!("failed to persist {key}: {e}").into());
        }
    }
}

/// Active language, shared by every view through context.
#[derive(Clone, Copy)]
pub(crate) struct I18n(pub RwSignal<Language>);

impl I18n {
    /// Restore the persisted language and keep it persisted on change.
    pub fn provide() -> Self {
        let language = RwSignal::new(load_language(&BrowserStore));
        Effect::new(move || {
            save_language(&mut BrowserStore, language.get());
        });
        let i18n = Self(language);
        provide_context(i18n);
        i18n
    }

    /// Tracked lookup; re-renders the caller when the language changes.
    pub fn t(self, key: &str) -> String {
        translate(self.0.get(), key)
    }

    pub fn language(self) -> Language {
        self.0.get()
    }

    pub fn set(self, language: Language) {
        self.0.set(language);
    }
}

pub(crate) fn use_i18n() -> I18n {
    expect_context()
}

/// Header control cycling through the available languages.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="lang-toggle" role="group" aria-label="Language">
            {Language::ALL
                .into_iter()
                .map(|language| {
                    view! {
                        <button
                            type="button"
                            class="lang-option"
                            class:active=move || i18n.language() == language
                            title=language.native_name()
                            on:click=move |_| i18n.set(language)
                        >
                            {language.short_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
