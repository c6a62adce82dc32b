use curbside_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A customer's review of a completed booking. Immutable after
/// creation; submission also folds the rating into the mechanic's
/// running average.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: DbId,
    pub booking_id: DbId,
    pub customer_id: UserId,
    pub mechanic_id: UserId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for submitting a review.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub booking_id: DbId,
    pub customer_id: UserId,
    pub mechanic_id: UserId,
    pub rating: i32,
    pub comment: Option<String>,
}
