//! HTTP-level tests for conversations and messaging.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use curbside_store::seed;

#[tokio::test]
async fn conversation_list_is_enriched_with_mechanic_details() {
    let app = common::build_test_app();
    let response = get(
        app,
        &format!("/api/users/{}/conversations", seed::CUSTOMER_ID),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let conversations = json.as_array().unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0]["mechanicName"], "Mike Rodriguez");
    assert_eq!(conversations[0]["mechanicAvailable"], true);
}

#[tokio::test]
async fn messages_are_chronological() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/conversations/1/messages").await).await;
    let messages = json.as_array().unwrap();
    assert_eq!(messages.len(), 2);

    let times: Vec<&str> = messages
        .iter()
        .map(|m| m["createdAt"].as_str().unwrap())
        .collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}

#[tokio::test]
async fn sending_a_message_bumps_the_conversation() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/messages",
        serde_json::json!({
            "conversationId": 1,
            "senderId": seed::CUSTOMER_ID,
            "content": "It happens at low speed too."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let message = body_json(response).await;
    assert_eq!(message["isRead"], false);

    let json = body_json(
        get(
            app,
            &format!("/api/users/{}/conversations", seed::CUSTOMER_ID),
        )
        .await,
    )
    .await;
    let conversation = &json.as_array().unwrap()[0];
    assert_eq!(conversation["lastMessageAt"], message["createdAt"]);
}

#[tokio::test]
async fn marking_a_conversation_read_flips_the_other_side() {
    let app = common::build_test_app();
    let response = patch_json(
        app.clone(),
        "/api/conversations/1/read",
        serde_json::json!({"readerId": seed::CUSTOMER_ID}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    // The seed conversation has exactly one unread mechanic message.
    assert_eq!(body_json(response).await["updated"], 1);

    let json = body_json(get(app, "/api/conversations/1/messages").await).await;
    assert!(json
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["isRead"] == true));
}
