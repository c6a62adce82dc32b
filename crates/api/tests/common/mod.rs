//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router via `tower::ServiceExt`
//! without a TCP listener, and the app is built with the same
//! [`build_app_router`] the production binary uses so every middleware
//! layer is exercised.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use curbside_api::config::ServerConfig;
use curbside_api::router::build_app_router;
use curbside_api::state::AppState;
use curbside_store::{MemStorage, StorePolicy};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8081".to_string()],
        request_timeout_secs: 30,
        strict_mode: false,
    }
}

/// Build the app over a freshly seeded permissive store.
pub fn build_test_app() -> Router {
    build_app_with_policy(StorePolicy::default())
}

/// Build the app over a freshly seeded strict store.
#[allow(dead_code)]
pub fn build_strict_test_app() -> Router {
    build_app_with_policy(StorePolicy::strict())
}

fn build_app_with_policy(policy: StorePolicy) -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(MemStorage::seeded(policy)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

#[allow(dead_code)]
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("PATCH")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}
