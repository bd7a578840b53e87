use std::path::PathBuf;

use surf_shared::ClientConfig;
use surf_shared::config::DEFAULT_API_BASE;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_DIST_DIR: &str = "client/dist";

pub fn server_port() -> u16 {
    std::env::var("SURF_SERVER_PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

/// Directory holding the built client bundle (`index.html`, wasm, css).
pub fn dist_dir() -> PathBuf {
    std::env::var("SURF_DIST_DIR")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR))
}

/// Client configuration published at `/config.json`.
pub fn client_config() -> ClientConfig {
    let api_base = std::env::var("SURF_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
    ClientConfig::new(&api_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_falls_back_on_missing_or_invalid_values() {
        temp_env::with_var_unset("SURF_SERVER_PORT", || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("SURF_SERVER_PORT", Some("not-a-port"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("SURF_SERVER_PORT", Some("0"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("SURF_SERVER_PORT", Some(" 8080 "), || {
            assert_eq!(server_port(), 8080);
        });
    }

    #[test]
    fn dist_dir_ignores_blank_override() {
        temp_env::with_var("SURF_DIST_DIR", Some("  "), || {
            assert_eq!(dist_dir(), PathBuf::from(DEFAULT_DIST_DIR));
        });
        temp_env::with_var("SURF_DIST_DIR", Some("/srv/surf"), || {
            assert_eq!(dist_dir(), PathBuf::from("/srv/surf"));
        });
    }

    #[test]
    fn api_base_is_normalized() {
        temp_env::with_var_unset("SURF_API_URL", || {
            assert_eq!(client_config().api_base, DEFAULT_API_BASE);
        });
        temp_env::with_var("SURF_API_URL", Some("https://stats.example.net/"), || {
            assert_eq!(client_config().api_base, "https://stats.example.net");
        });
    }
}
