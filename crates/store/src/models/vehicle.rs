use curbside_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A customer's vehicle. Owned by exactly one user; never mutated or
/// deleted after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: DbId,
    pub user_id: UserId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for registering a vehicle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicle {
    pub user_id: UserId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
}
