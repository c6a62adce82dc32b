//! HTTP-level tests for the booking lifecycle.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use curbside_store::seed;

fn booking_body(scheduled: &str, total: &str) -> serde_json::Value {
    serde_json::json!({
        "customerId": seed::CUSTOMER_ID,
        "mechanicId": seed::MECHANIC_MIKE,
        "vehicleId": 1,
        "serviceId": 1,
        "scheduledDate": scheduled,
        "location": "500 Castro St, Mountain View",
        "totalPrice": total
    })
}

// ---------------------------------------------------------------------------
// Creation & fee split
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_booking_returns_201_with_derived_fees() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/bookings",
        booking_body("2026-09-15T10:00:00Z", "75.00"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["totalPrice"], "75.00");
    assert_eq!(json["platformFee"], "15.00");
    assert_eq!(json["mechanicPayout"], "60.00");
    assert_eq!(json["completedAt"], serde_json::Value::Null);
}

#[tokio::test]
async fn get_booking_returns_raw_record() {
    let app = common::build_test_app();
    let created = body_json(
        post_json(
            app.clone(),
            "/api/bookings",
            booking_body("2026-09-15T10:00:00Z", "250.00"),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/bookings/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["platformFee"], "50.00");
    assert_eq!(json["mechanicPayout"], "200.00");
    // The raw record is unenriched.
    assert!(json.get("service").is_none());
}

#[tokio::test]
async fn get_unknown_booking_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/bookings/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn completing_a_booking_stamps_completed_at() {
    let app = common::build_test_app();
    let created = body_json(
        post_json(
            app.clone(),
            "/api/bookings",
            booking_body("2026-09-15T10:00:00Z", "120.00"),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = patch_json(
        app.clone(),
        &format!("/api/bookings/{id}/status"),
        serde_json::json!({"status": "accepted"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "accepted");
    assert_eq!(json["completedAt"], serde_json::Value::Null);

    let response = patch_json(
        app,
        &format!("/api/bookings/{id}/status"),
        serde_json::json!({"status": "completed"}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "completed");
    assert!(json["completedAt"].is_string());
}

#[tokio::test]
async fn status_transition_on_unknown_booking_returns_404() {
    let app = common::build_test_app();
    let response = patch_json(
        app,
        "/api/bookings/9999/status",
        serde_json::json!({"status": "accepted"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Enriched listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn booking_list_is_enriched_and_sorted_descending() {
    let app = common::build_test_app();
    for scheduled in [
        "2026-09-10T09:00:00Z",
        "2026-09-01T09:00:00Z",
        "2026-09-20T09:00:00Z",
    ] {
        post_json(app.clone(), "/api/bookings", booking_body(scheduled, "75.00")).await;
    }

    let json = body_json(
        get(app, &format!("/api/users/{}/bookings", seed::CUSTOMER_ID)).await,
    )
    .await;
    let bookings = json.as_array().unwrap();
    assert_eq!(bookings.len(), 3);

    let dates: Vec<&str> = bookings
        .iter()
        .map(|b| b["scheduledDate"].as_str().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);

    // Enrichment joins service, mechanic, and vehicle; embedded money
    // is float-typed while the stored fields stay decimal strings.
    let first = &bookings[0];
    assert_eq!(first["service"]["name"], "Oil Change");
    assert_eq!(first["service"]["basePrice"], 75.0);
    assert_eq!(first["mechanic"]["name"], "Mike Rodriguez");
    assert_eq!(first["vehicle"]["make"], "Honda");
    assert_eq!(first["totalPrice"], "75.00");
}

#[tokio::test]
async fn dangling_mechanic_reference_yields_null_field() {
    let app = common::build_test_app();
    let mut body = booking_body("2026-09-15T10:00:00Z", "75.00");
    body["mechanicId"] = serde_json::json!("no-such-mechanic");
    post_json(app.clone(), "/api/bookings", body).await;

    let json = body_json(
        get(app, &format!("/api/users/{}/bookings", seed::CUSTOMER_ID)).await,
    )
    .await;
    let booking = &json.as_array().unwrap()[0];
    assert_eq!(booking["mechanic"], serde_json::Value::Null);
    // The rest of the record still comes back.
    assert_eq!(booking["location"], "500 Castro St, Mountain View");
    assert_eq!(booking["service"]["name"], "Oil Change");
}
