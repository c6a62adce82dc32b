//! Read-side view construction.
//!
//! Typed joins assembled at read time by id lookup against the live
//! collections, so a view always reflects the latest catalog and profile
//! state rather than anything denormalized at write time. A dangling
//! reference yields a `None` field serialized as `null`; assembling a
//! view never fails wholesale because one reference is missing.
//!
//! This is the only place monetary `Decimal`s are coerced to floats, to
//! match the number-typed JSON the mobile client expects in enriched
//! responses. The coercion is lossy and deliberately kept off the write
//! path and out of the stored records.

use rust_decimal::Decimal;
use serde::Serialize;

use curbside_core::types::DbId;

use crate::models::{Booking, Conversation, MechanicProfile, Service, User, Vehicle};

/* --------------------------------------------------------------------------
   Embedded summaries
   -------------------------------------------------------------------------- */

/// Catalog details embedded in a booking view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    pub duration_minutes: i32,
    pub icon: String,
}

impl ServiceSummary {
    fn of(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone(),
            base_price: service.base_price,
            duration_minutes: service.duration_minutes,
            icon: service.icon.clone(),
        }
    }
}

/// Mechanic details embedded in a booking view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MechanicSummary {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    pub review_count: i32,
}

/// Vehicle details embedded in a booking view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: Option<String>,
}

impl VehicleSummary {
    fn of(vehicle: &Vehicle) -> Self {
        Self {
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            license_plate: vehicle.license_plate.clone(),
        }
    }
}

/* --------------------------------------------------------------------------
   Booking view
   -------------------------------------------------------------------------- */

/// A booking enriched with its service, mechanic, and vehicle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub service: Option<ServiceSummary>,
    pub mechanic: Option<MechanicSummary>,
    pub vehicle: Option<VehicleSummary>,
}

impl BookingView {
    /// Assemble the view from whatever references resolved.
    pub fn assemble(
        booking: Booking,
        service: Option<&Service>,
        mechanic: Option<(&MechanicProfile, &User)>,
        vehicle: Option<&Vehicle>,
    ) -> Self {
        Self {
            booking,
            service: service.map(ServiceSummary::of),
            mechanic: mechanic.map(|(profile, user)| MechanicSummary {
                name: user.name.clone(),
                rating: profile.rating,
                review_count: profile.review_count,
            }),
            vehicle: vehicle.map(VehicleSummary::of),
        }
    }
}

/* --------------------------------------------------------------------------
   Conversation view
   -------------------------------------------------------------------------- */

/// A conversation enriched with the mechanic's display name and
/// availability.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    #[serde(flatten)]
    pub conversation: Conversation,
    pub mechanic_name: Option<String>,
    pub mechanic_available: Option<bool>,
}

impl ConversationView {
    pub fn assemble(
        conversation: Conversation,
        mechanic: Option<(&MechanicProfile, &User)>,
    ) -> Self {
        Self {
            conversation,
            mechanic_name: mechanic.map(|(_, user)| user.name.clone()),
            mechanic_available: mechanic.map(|(profile, _)| profile.is_available),
        }
    }
}

/* --------------------------------------------------------------------------
   Mechanic view
   -------------------------------------------------------------------------- */

/// A mechanic profile flattened together with its owning user, the
/// shape the browse screens consume.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MechanicView {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub specialty: String,
    pub bio: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub hourly_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    pub review_count: i32,
    pub completed_jobs: i32,
    pub is_verified: bool,
    pub is_available: bool,
    pub service_radius: i32,
}

impl MechanicView {
    pub fn assemble(profile: &MechanicProfile, user: &User) -> Self {
        Self {
            id: profile.id.clone(),
            user_id: profile.user_id.clone(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            specialty: profile.specialty.clone(),
            bio: profile.bio.clone(),
            hourly_rate: profile.hourly_rate,
            rating: profile.rating,
            review_count: profile.review_count,
            completed_jobs: profile.completed_jobs,
            is_verified: profile.is_verified,
            is_available: profile.is_available,
            service_radius: profile.service_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn sample_booking() -> Booking {
        let now = Utc::now();
        Booking {
            id: 1,
            customer_id: "cust-1".into(),
            mechanic_id: "mech-1".into(),
            vehicle_id: 1,
            service_id: 1,
            status: "pending".into(),
            scheduled_date: now,
            location: "12 Main St".into(),
            latitude: None,
            longitude: None,
            notes: None,
            total_price: dec!(75.00),
            platform_fee: dec!(15.00),
            mechanic_payout: dec!(60.00),
            stripe_payment_intent_id: None,
            stripe_charge_id: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    #[test]
    fn dangling_references_serialize_as_null() {
        let view = BookingView::assemble(sample_booking(), None, None, None);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["service"].is_null());
        assert!(json["mechanic"].is_null());
        assert!(json["vehicle"].is_null());
        // The underlying booking fields are still flattened in.
        assert_eq!(json["location"], "12 Main St");
        assert_eq!(json["totalPrice"], "75.00");
    }

    #[test]
    fn embedded_prices_are_floats_but_stored_prices_are_strings() {
        let service = Service {
            id: 1,
            name: "Oil Change".into(),
            description: "Full synthetic oil change".into(),
            base_price: dec!(75.00),
            duration_minutes: 45,
            icon: "oil".into(),
            is_active: true,
        };
        let view = BookingView::assemble(sample_booking(), Some(&service), None, None);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["service"]["basePrice"], 75.0);
        assert_eq!(json["totalPrice"], "75.00");
    }
}
