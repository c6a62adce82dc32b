//! HTTP-level tests for user lookup and vehicle endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use curbside_store::seed;

#[tokio::test]
async fn get_user_by_id() {
    let app = common::build_test_app();
    let response = get(app, &format!("/api/users/{}", seed::CUSTOMER_ID)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Sarah Chen");
    assert_eq!(json["role"], "customer");
}

#[tokio::test]
async fn get_unknown_user_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/users/no-such-user").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_vehicles_for_user() {
    let app = common::build_test_app();
    let response = get(app, &format!("/api/users/{}/vehicles", seed::CUSTOMER_ID)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let vehicles = json.as_array().unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["make"], "Honda");
    assert_eq!(vehicles[0]["model"], "Civic");
}

#[tokio::test]
async fn create_vehicle_then_list_round_trips() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/vehicles",
        serde_json::json!({
            "userId": seed::CUSTOMER_ID,
            "make": "Subaru",
            "model": "Outback",
            "year": 2022,
            "licensePlate": "8XYZ321"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["id"].is_number());
    assert_eq!(created["vin"], serde_json::Value::Null);

    let json = body_json(
        get(app, &format!("/api/users/{}/vehicles", seed::CUSTOMER_ID)).await,
    )
    .await;
    let fetched = json
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["id"] == created["id"])
        .expect("created vehicle is listed")
        .clone();
    assert_eq!(fetched, created);
}
