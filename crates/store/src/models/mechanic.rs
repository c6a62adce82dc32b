use curbside_core::types::{Timestamp, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A 1:1 extension of a user with the `mechanic` role.
///
/// `rating` is always the arithmetic mean of every review rating the
/// mechanic has received, and `review_count` is the number of reviews
/// contributing to that mean. Both are mutated only by review
/// submission (see the storage layer).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MechanicProfile {
    pub id: UserId,
    pub user_id: UserId,
    pub specialty: String,
    pub bio: String,
    pub hourly_rate: Decimal,
    pub rating: Decimal,
    pub review_count: i32,
    pub completed_jobs: i32,
    pub is_verified: bool,
    pub is_available: bool,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    /// How far the mechanic travels for jobs, in miles.
    pub service_radius: i32,
    pub created_at: Timestamp,
}
