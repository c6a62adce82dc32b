//! Conversation and messaging handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use curbside_core::types::DbId;
use curbside_store::models::CreateMessage;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/users/{id}/conversations
///
/// A customer's conversations, enriched with the mechanic's name and
/// availability, most recently active first.
pub async fn list_conversations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let conversations = state.store.conversations_for_customer(&user_id).await;
    Ok(Json(conversations))
}

/// GET /api/conversations/{id}/messages
///
/// Chronological message list.
pub async fn list_messages(
    State(state): State<AppState>,
    Path(conversation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let messages = state.store.messages_in_conversation(conversation_id).await;
    Ok(Json(messages))
}

/// POST /api/messages
pub async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<CreateMessage>,
) -> AppResult<impl IntoResponse> {
    let message = state.store.create_message(input).await?;

    tracing::info!(
        message_id = message.id,
        conversation_id = message.conversation_id,
        sender_id = %message.sender_id,
        "Message sent"
    );

    Ok((StatusCode::CREATED, Json(message)))
}

/// Request body for marking a conversation read.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadInput {
    pub reader_id: String,
}

/// PATCH /api/conversations/{id}/read
///
/// Mark every message not sent by the reader as read.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(conversation_id): Path<DbId>,
    Json(input): Json<MarkReadInput>,
) -> AppResult<impl IntoResponse> {
    let updated = state
        .store
        .mark_messages_read(conversation_id, &input.reader_id)
        .await?;
    Ok(Json(json!({ "updated": updated })))
}
