mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn health_reports_ok() {
    let app = common::build_test_app();
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}
