use leptos::prelude::*;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

use surf_shared::{Endpoint, FetchError, LoadState};

use crate::scope::{LatestRequest, ViewScope};

/// Absolute URL of `endpoint` under `api_base`, path and query components URI-encoded.
pub(crate) fn endpoint_url(api_base: &str, endpoint: &Endpoint) -> String {
    endpoint.url_with(api_base, |raw| {
        String::from(js_sys::encode_uri_component(raw))
    })
}

/// GET `url` and decode the JSON body.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| {
            if signal.is_some_and(AbortSignal::aborted) {
                FetchError::Aborted
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch an API endpoint on behalf of a view. Returns `None` when the view
/// went away while the request was in flight; the result must then be dropped.
pub(crate) async fn fetch_for<T: DeserializeOwned>(
    scope: ViewScope,
    api_base: &str,
    endpoint: &Endpoint,
) -> Option<Result<T, FetchError>> {
    let url = endpoint_url(api_base, endpoint);
    let signal = scope.abort_signal()?;
    let result = fetch_json::<T>(&url, Some(&signal)).await;
    if !scope.is_alive() || matches!(result, Err(FetchError::Aborted)) {
        return None;
    }
    if let Err(e) = &result {
        web_sys::console::warn_1(&format!("GET {url} failed: {e}").into());
    }
    Some(result)
}

/// Fetch `endpoint` into `target`, applying `transform` to the decoded body.
/// Only the newest request issued through `latest` may write its result.
pub(crate) fn spawn_load<R, T>(
    scope: ViewScope,
    latest: LatestRequest,
    api_base: String,
    endpoint: Endpoint,
    target: RwSignal<LoadState<T>>,
    transform: impl FnOnce(R) -> T + 'static,
) where
    R: DeserializeOwned + 'static,
    T: Send + Sync + 'static,
{
    let ticket = latest.begin();
    target.set(LoadState::Loading);
    wasm_bindgen_futures::spawn_local(async move {
        let Some(result) = fetch_for::<R>(scope, &api_base, &endpoint).await else {
            return;
        };
        if !latest.is_current(ticket) {
            return;
        }
        target.set(LoadState::from_result(result.map(transform)));
    });
}
