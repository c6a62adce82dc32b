use curbside_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry. Static reference data seeded at startup; not owned
/// by any mechanic. Inactive entries are hidden from catalog listings
/// but stay resolvable from existing bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    pub duration_minutes: i32,
    pub icon: String,
    pub is_active: bool,
}
