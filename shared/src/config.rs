use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "/api";

/// Runtime configuration the host publishes at `/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: normalize_api_base(api_base),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Trim whitespace and trailing slashes; blank input means the default base.
/// A lone `/` normalizes to the empty string (same-origin root).
pub fn normalize_api_base(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_API_BASE.to_string();
    }
    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_api_base() {
        assert_eq!(normalize_api_base("https://api.test/"), "https://api.test");
        assert_eq!(normalize_api_base("  "), DEFAULT_API_BASE);
        assert_eq!(normalize_api_base("/"), "");
        assert_eq!(ClientConfig::new("/api//").api_base, "/api");
    }

    #[test]
    fn config_json_shape_is_stable() {
        let json = serde_json::to_value(ClientConfig::new("https://api.test")).unwrap();
        assert_eq!(json, serde_json::json!({ "api_base": "https://api.test" }));
    }
}
