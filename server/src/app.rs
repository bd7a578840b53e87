use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};

use surf_shared::ClientConfig;

#[derive(Clone)]
pub(crate) struct HostState {
    client_config: Arc<ClientConfig>,
}

pub(crate) fn build_app(dist_dir: PathBuf, client_config: ClientConfig) -> Router {
    let state = HostState {
        client_config: Arc::new(client_config),
    };

    // Unknown paths fall back to index.html so deep links boot the app.
    let index = ServeFile::new(dist_dir.join("index.html"));
    let static_assets = Router::new()
        .fallback_service(
            ServeDir::new(&dist_dir)
                .precompressed_br()
                .precompressed_gzip()
                .fallback(index),
        )
        .layer(middleware::from_fn(set_static_cache_control));

    Router::new()
        .route("/config.json", get(get_client_config))
        .route("/healthz", get(health))
        .with_state(state)
        .fallback_service(static_assets)
        .layer(CompressionLayer::new())
}

async fn get_client_config(State(state): State<HostState>) -> Response {
    let mut response = Json(state.client_config.as_ref().clone()).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

async fn health() -> &'static str {
    "ok"
}

async fn set_static_cache_control(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if response.status().is_success()
        && let Some(cache_control) = cache_control_for_path(&path)
    {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(cache_control),
        );
    }

    response
}

fn cache_control_for_path(path: &str) -> Option<&'static str> {
    if is_hashed_bundle_asset(path) {
        return Some("public, max-age=31536000, immutable");
    }

    if path == "/placeholder.svg" || path.starts_with("/fonts/") {
        return Some("public, max-age=86400");
    }

    None
}

fn is_hashed_bundle_asset(path: &str) -> bool {
    let Some(ext) = Path::new(path).extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    if !matches!(ext, "wasm" | "js" | "css") {
        return false;
    }

    let Some(filename) = Path::new(path).file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    filename
        .split(['-', '_', '.'])
        .any(|segment| segment.len() >= 8 && segment.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn dist_fixture(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("surf-dist-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<!DOCTYPE html><div id=\"app\"></div>").unwrap();
        std::fs::write(dir.join("surf-client-0a1b2c3d4e5f6071_bg.wasm"), b"\0asm").unwrap();
        dir
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn request_to(uri: &str) -> Request {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn config_json_publishes_api_base() {
        let app = build_app(dist_fixture("config"), ClientConfig::new("https://stats.test/"));
        let response = app.oneshot(request_to("/config.json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-cache"
        );
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, serde_json::json!({ "api_base": "https://stats.test" }));
    }

    #[tokio::test]
    async fn healthz_answers_ok() {
        let app = build_app(dist_fixture("health"), ClientConfig::default());
        let response = app.oneshot(request_to("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }

    #[tokio::test]
    async fn deep_links_fall_back_to_index() {
        let app = build_app(dist_fixture("deep"), ClientConfig::default());
        let response = app
            .oneshot(request_to("/profile/76561198000000001"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn hashed_bundle_is_served_immutable() {
        let app = build_app(dist_fixture("bundle"), ClientConfig::default());
        let response = app
            .oneshot(request_to("/surf-client-0a1b2c3d4e5f6071_bg.wasm"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=31536000, immutable"
        );
    }

    #[test]
    fn immutable_cache_for_hashed_bundle_assets() {
        assert_eq!(
            cache_control_for_path("/surf-client-71578f6b278221f3_bg.wasm"),
            Some("public, max-age=31536000, immutable")
        );
        assert_eq!(
            cache_control_for_path("/style-a93762ff3bf6d63a.css"),
            Some("public, max-age=31536000, immutable")
        );
        assert_eq!(cache_control_for_path("/style.css"), None);
    }

    #[test]
    fn day_cache_for_unhashed_static_assets() {
        assert_eq!(
            cache_control_for_path("/placeholder.svg"),
            Some("public, max-age=86400")
        );
    }

    #[test]
    fn no_cache_header_override_for_html() {
        assert_eq!(cache_control_for_path("/"), None);
        assert_eq!(cache_control_for_path("/index.html"), None);
        assert_eq!(cache_control_for_path("/maps/surf_utopia"), None);
    }
}
