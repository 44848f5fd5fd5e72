#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;

use diabetcare::config::{CommunityConfig, Config, ObservabilityConfig, ServerConfig};

pub fn test_config(seed_demo_posts: bool) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        observability: ObservabilityConfig::default(),
        community: CommunityConfig { seed_demo_posts },
    }
}

/// Router with the demo community posts loaded, matching production defaults.
pub fn create_test_app() -> Router {
    diabetcare::create_app(test_config(true)).expect("failed to build app")
}

/// Router with an empty community board.
pub fn create_test_app_without_seed() -> Router {
    diabetcare::create_app(test_config(false)).expect("failed to build app")
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> axum::http::Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}
