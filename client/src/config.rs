use leptos::prelude::*;

use surf_shared::ClientConfig;
use surf_shared::config::DEFAULT_API_BASE;

use crate::http::fetch_json;

/// Base URL of the statistics API, resolved once at boot.
#[derive(Clone, Copy)]
pub(crate) struct ApiBase(pub RwSignal<String>);

/// Build-time default: `SURF_API_URL` when set while compiling, `/api` otherwise.
pub(crate) fn compiled_config() -> ClientConfig {
    ClientConfig::new(option_env!("SURF_API_URL").unwrap_or(DEFAULT_API_BASE))
}

/// Ask the host for `/config.json`; a missing or malformed file keeps the build-time default.
pub(crate) fn load_runtime_config(api_base: RwSignal<String>, ready: RwSignal<bool>) {
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_json::<ClientConfig>("/config.json", None).await {
            Ok(config) => {
                let config = ClientConfig::new(&config.api_base);
                api_base.set(config.api_base);
            }
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("config.json unavailable, using {}: {e}", api_base.get_untracked())
                        .into(),
                );
            }
        }
        ready.set(true);
    });
}
