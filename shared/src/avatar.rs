//! Session-scoped avatar URL cache.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::lenient;

pub const DEFAULT_AVATARS: [&str; 3] = [
    "https://avatars.steamstatic.com/b5bd56c1aa4644a474a2e4972be27ef9e82e517e_full.jpg",
    "https://avatars.steamstatic.com/fef49e7fa7e1997310d705b2a6158ff8dc1cdfeb_full.jpg",
    "https://avatars.steamstatic.com/c5d56249ee5d28a07db4ac9f7f60af961fab5426_full.jpg",
];

/// `/avatar/{id}` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvatarResponse {
    #[serde(default, deserialize_with = "lenient::string")]
    pub steamid: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub avatar_url: String,
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub stale: bool,
}

/// Fallback avatar picked from the id's trailing character. For decimal
/// Steam ids this equals the trailing digit modulo three.
pub fn default_avatar(player_id: &str) -> &'static str {
    let index = player_id
        .chars()
        .last()
        .map(|c| c as usize % DEFAULT_AVATARS.len())
        .unwrap_or(0);
    DEFAULT_AVATARS[index]
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Pending,
    Resolved(String),
}

/// Player id → avatar URL. Entries are never evicted during a session; a
/// later resolution for the same id overwrites the earlier one.
#[derive(Debug, Clone, Default)]
pub struct AvatarCache {
    entries: HashMap<String, Slot>,
}

impl AvatarCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller should issue the fetch. Ids already
    /// resolved or in flight are not fetched again.
    pub fn claim(&mut self, player_id: &str) -> bool {
        if player_id.is_empty() || self.entries.contains_key(player_id) {
            return false;
        }
        self.entries.insert(player_id.to_string(), Slot::Pending);
        true
    }

    /// Record a successful lookup; an empty URL maps to the first default.
    pub fn resolve(&mut self, player_id: &str, avatar_url: &str) {
        let url = if avatar_url.is_empty() {
            DEFAULT_AVATARS[0]
        } else {
            avatar_url
        };
        self.entries
            .insert(player_id.to_string(), Slot::Resolved(url.to_string()));
    }

    /// Record a failed lookup with the id's deterministic default.
    pub fn fail(&mut self, player_id: &str) {
        self.entries.insert(
            player_id.to_string(),
            Slot::Resolved(default_avatar(player_id).to_string()),
        );
    }

    pub fn get(&self, player_id: &str) -> Option<&str> {
        match self.entries.get(player_id) {
            Some(Slot::Resolved(url)) => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_request_for_same_id_is_not_fetched() {
        let mut cache = AvatarCache::new();
        assert!(cache.claim("76561198000000001"));
        assert!(!cache.claim("76561198000000001"));
        cache.resolve("76561198000000001", "https://cdn.test/a.jpg");
        assert!(!cache.claim("76561198000000001"));
        assert_eq!(cache.get("76561198000000001"), Some("https://cdn.test/a.jpg"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn pending_entries_have_no_url_yet() {
        let mut cache = AvatarCache::new();
        cache.claim("1");
        assert_eq!(cache.get("1"), None);
        cache.resolve("1", "https://cdn.test/1.jpg");
        assert_eq!(cache.get("1"), Some("https://cdn.test/1.jpg"));
    }

    #[test]
    fn failure_picks_default_by_trailing_digit() {
        assert_eq!(default_avatar("76561198000000000"), DEFAULT_AVATARS[0]);
        assert_eq!(default_avatar("76561198000000001"), DEFAULT_AVATARS[1]);
        assert_eq!(default_avatar("76561198000000005"), DEFAULT_AVATARS[2]);
        assert_eq!(default_avatar("76561198000000009"), DEFAULT_AVATARS[0]);

        let mut cache = AvatarCache::new();
        cache.claim("76561198000000004");
        cache.fail("76561198000000004");
        assert_eq!(cache.get("76561198000000004"), Some(DEFAULT_AVATARS[1]));
    }

    #[test]
    fn default_is_stable_for_non_numeric_ids() {
        let first = default_avatar("STEAM_1:0:abc");
        assert_eq!(first, default_avatar("STEAM_1:0:abc"));
        assert!(DEFAULT_AVATARS.contains(&first));
        assert_eq!(default_avatar(""), DEFAULT_AVATARS[0]);
    }

    #[test]
    fn empty_url_resolves_to_first_default_and_last_write_wins() {
        let mut cache = AvatarCache::new();
        cache.resolve("7", "");
        assert_eq!(cache.get("7"), Some(DEFAULT_AVATARS[0]));
        cache.resolve("7", "https://cdn.test/new.jpg");
        assert_eq!(cache.get("7"), Some("https://cdn.test/new.jpg"));
    }

    #[test]
    fn blank_ids_are_never_claimed() {
        let mut cache = AvatarCache::new();
        assert!(!cache.claim(""));
        assert!(cache.is_empty());
    }
}
