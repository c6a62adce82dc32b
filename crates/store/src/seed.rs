//! Deterministic boot dataset.
//!
//! The store is process-lifetime only, so every fresh process starts
//! from this dataset: the service catalog, three mechanics, a demo
//! customer with one vehicle, and one conversation. Ids are fixed
//! constants rather than random UUIDs so two fresh processes are
//! field-for-field identical apart from creation timestamps.

use chrono::Utc;
use rust_decimal_macros::dec;

use crate::memory::StoreInner;
use crate::models::user::{ROLE_CUSTOMER, ROLE_MECHANIC};
use crate::models::{Conversation, MechanicProfile, Message, Service, User, Vehicle};

/// Seed customer ("Sarah Chen").
pub const CUSTOMER_ID: &str = "11111111-0000-4000-8000-000000000001";
/// Seed mechanic profile ids.
pub const MECHANIC_MIKE: &str = "22222222-0000-4000-8000-000000000001";
pub const MECHANIC_JAMES: &str = "22222222-0000-4000-8000-000000000002";
pub const MECHANIC_ELENA: &str = "22222222-0000-4000-8000-000000000003";

const MECHANIC_USER_MIKE: &str = "33333333-0000-4000-8000-000000000001";
const MECHANIC_USER_JAMES: &str = "33333333-0000-4000-8000-000000000002";
const MECHANIC_USER_ELENA: &str = "33333333-0000-4000-8000-000000000003";

/// Populate an empty [`StoreInner`] with the boot dataset.
pub fn populate(inner: &mut StoreInner) {
    let now = Utc::now();

    /* -- Service catalog --------------------------------------------------- */

    let catalog = [
        ("Oil Change", "Full synthetic oil and filter change", dec!(75.00), 45, "oil", true),
        ("Brake Inspection", "Pads, rotors, and fluid inspection", dec!(120.00), 60, "brakes", true),
        ("Battery Replacement", "Battery test and replacement", dec!(150.00), 30, "battery", true),
        ("Tire Rotation", "Rotate and balance all four tires", dec!(50.00), 30, "tire", true),
        ("Engine Diagnostic", "OBD-II scan and diagnostic report", dec!(95.00), 60, "engine", true),
        ("A/C Service", "A/C inspection and refrigerant recharge", dec!(135.00), 90, "ac", true),
        // Retired offering, kept resolvable from old bookings.
        ("Winter Prep Package", "Seasonal inspection bundle", dec!(180.00), 120, "winter", false),
    ];
    for (name, description, base_price, duration_minutes, icon, is_active) in catalog {
        let id = inner.next_service_id();
        inner.services.insert(
            id,
            Service {
                id,
                name: name.to_string(),
                description: description.to_string(),
                base_price,
                duration_minutes,
                icon: icon.to_string(),
                is_active,
            },
        );
    }

    /* -- Demo customer ----------------------------------------------------- */

    inner.users.insert(
        CUSTOMER_ID.to_string(),
        User {
            id: CUSTOMER_ID.to_string(),
            email: "sarah.chen@example.com".to_string(),
            name: "Sarah Chen".to_string(),
            phone: Some("+1-415-555-0132".to_string()),
            role: ROLE_CUSTOMER.to_string(),
            avatar_url: None,
            stripe_customer_id: None,
            created_at: now,
            updated_at: now,
        },
    );

    let vehicle_id = inner.next_vehicle_id();
    inner.vehicles.insert(
        vehicle_id,
        Vehicle {
            id: vehicle_id,
            user_id: CUSTOMER_ID.to_string(),
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2019,
            license_plate: Some("7ABC123".to_string()),
            vin: None,
            created_at: now,
        },
    );

    /* -- Mechanics --------------------------------------------------------- */

    let mechanics = [
        (
            MECHANIC_MIKE,
            MECHANIC_USER_MIKE,
            "Mike Rodriguez",
            "mike.rodriguez@example.com",
            "Engine & Transmission",
            "ASE-certified master technician with 15 years of mobile service experience.",
            dec!(85.00),
            dec!(4.90),
            127,
            342,
            true,
            true,
            25,
        ),
        (
            MECHANIC_JAMES,
            MECHANIC_USER_JAMES,
            "James Okafor",
            "james.okafor@example.com",
            "Brakes & Suspension",
            "Former dealership lead tech, specializing in brakes and steering.",
            dec!(75.00),
            dec!(4.75),
            89,
            203,
            true,
            true,
            20,
        ),
        (
            MECHANIC_ELENA,
            MECHANIC_USER_ELENA,
            "Elena Petrova",
            "elena.petrova@example.com",
            "Electrical & Diagnostics",
            "Diagnostics specialist focused on hybrids and EV auxiliary systems.",
            dec!(95.00),
            dec!(5.00),
            12,
            31,
            true,
            false,
            15,
        ),
    ];
    for (
        profile_id,
        user_id,
        name,
        email,
        specialty,
        bio,
        hourly_rate,
        rating,
        review_count,
        completed_jobs,
        is_verified,
        is_available,
        service_radius,
    ) in mechanics
    {
        inner.users.insert(
            user_id.to_string(),
            User {
                id: user_id.to_string(),
                email: email.to_string(),
                name: name.to_string(),
                phone: None,
                role: ROLE_MECHANIC.to_string(),
                avatar_url: None,
                stripe_customer_id: None,
                created_at: now,
                updated_at: now,
            },
        );
        inner.mechanics.insert(
            profile_id.to_string(),
            MechanicProfile {
                id: profile_id.to_string(),
                user_id: user_id.to_string(),
                specialty: specialty.to_string(),
                bio: bio.to_string(),
                hourly_rate,
                rating,
                review_count,
                completed_jobs,
                is_verified,
                is_available,
                latitude: None,
                longitude: None,
                service_radius,
                created_at: now,
            },
        );
    }

    /* -- Starter conversation ---------------------------------------------- */

    let conversation_id = inner.next_conversation_id();
    let first = inner.next_message_id();
    inner.messages.insert(
        first,
        Message {
            id: first,
            conversation_id,
            sender_id: CUSTOMER_ID.to_string(),
            content: "Hi Mike, my Civic is making a clicking noise when turning.".to_string(),
            is_read: true,
            created_at: now,
        },
    );
    let second = inner.next_message_id();
    inner.messages.insert(
        second,
        Message {
            id: second,
            conversation_id,
            sender_id: MECHANIC_USER_MIKE.to_string(),
            content: "Happy to take a look. Does it happen at low speed too?".to_string(),
            is_read: false,
            created_at: now,
        },
    );
    inner.conversations.insert(
        conversation_id,
        Conversation {
            id: conversation_id,
            customer_id: CUSTOMER_ID.to_string(),
            mechanic_id: MECHANIC_MIKE.to_string(),
            last_message_at: now,
            created_at: now,
        },
    );
}
