use curbside_core::types::{DbId, Timestamp, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A scheduled service appointment between a customer and a mechanic
/// for a specific vehicle and service.
///
/// `platform_fee` and `mechanic_payout` are derived from `total_price`
/// exactly once at creation (20%/80%, each rounded to 2 dp on its own)
/// and never recomputed. `completed_at` is set on the transition to
/// `completed` and never cleared. Bookings are never physically deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub customer_id: UserId,
    pub mechanic_id: UserId,
    pub vehicle_id: DbId,
    pub service_id: DbId,
    pub status: String,
    pub scheduled_date: Timestamp,
    pub location: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub notes: Option<String>,
    pub total_price: Decimal,
    pub platform_fee: Decimal,
    pub mechanic_payout: Decimal,
    /// Payment-gateway references. Schema columns only; no gateway
    /// integration exists in this service.
    pub stripe_payment_intent_id: Option<String>,
    pub stripe_charge_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// DTO for creating a booking. `total_price` arrives as a decimal
/// string on the wire; the fee split is computed by the store, never
/// supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub customer_id: UserId,
    pub mechanic_id: UserId,
    pub vehicle_id: DbId,
    pub service_id: DbId,
    /// Defaults to `pending` when absent.
    pub status: Option<String>,
    pub scheduled_date: Timestamp,
    pub location: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub notes: Option<String>,
    pub total_price: Decimal,
}
