use curbside_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/* --------------------------------------------------------------------------
   Conversations
   -------------------------------------------------------------------------- */

/// A message thread between a customer and a mechanic.
///
/// Conceptually one per (customer, mechanic) pair, though uniqueness is
/// not enforced. `last_message_at` is bumped every time a message is
/// appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: DbId,
    pub customer_id: UserId,
    pub mechanic_id: UserId,
    pub last_message_at: Timestamp,
    pub created_at: Timestamp,
}

/* --------------------------------------------------------------------------
   Messages
   -------------------------------------------------------------------------- */

/// A single message in a conversation. Immutable after creation except
/// for the read flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: DbId,
    pub conversation_id: DbId,
    pub sender_id: UserId,
    pub content: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for appending a message to a conversation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessage {
    pub conversation_id: DbId,
    pub sender_id: UserId,
    pub content: String,
}
