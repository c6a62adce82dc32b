//! In-memory storage engine.
//!
//! Every collection lives in one [`StoreInner`] behind a single
//! `tokio::sync::RwLock`. Write operations hold the write guard for
//! their whole read-modify-write, so id assignment plus fee computation
//! on booking creation, and the rating read-modify-write on review
//! submission, are atomic with respect to every other operation. Reads
//! take the shared guard.
//!
//! Process restart discards everything; a fresh store reproduces the
//! deterministic seed dataset (see [`crate::seed`]).

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use curbside_core::booking as status;
use curbside_core::error::CoreError;
use curbside_core::money::FeeSplit;
use curbside_core::rating;
use curbside_core::types::DbId;

use crate::models::user::ROLE_CUSTOMER;
use crate::models::{
    Booking, Conversation, CreateBooking, CreateMessage, CreateReview, CreateUser, CreateVehicle,
    MechanicProfile, Message, Review, Service, User, Vehicle,
};
use crate::storage::Storage;
use crate::views::{BookingView, ConversationView, MechanicView};

/* --------------------------------------------------------------------------
   Policy
   -------------------------------------------------------------------------- */

/// Strictness knobs for write-path validation.
///
/// The service has always been permissive: any status string is
/// accepted, ratings are unchecked, a booking can be reviewed twice, and
/// messages into unknown conversations are stored as orphans. That
/// stays the default. With `strict` on, those writes are rejected with
/// validation/conflict errors instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorePolicy {
    pub strict: bool,
}

impl StorePolicy {
    pub const fn strict() -> Self {
        Self { strict: true }
    }
}

/* --------------------------------------------------------------------------
   Collections
   -------------------------------------------------------------------------- */

/// All entity collections plus the sequential-id counters.
///
/// Entities hold no live references to one another; relationships are
/// by foreign-key id and resolved on read.
#[derive(Debug, Default)]
pub struct StoreInner {
    pub users: HashMap<String, User>,
    pub mechanics: HashMap<String, MechanicProfile>,
    pub services: HashMap<DbId, Service>,
    pub vehicles: HashMap<DbId, Vehicle>,
    pub bookings: HashMap<DbId, Booking>,
    pub reviews: HashMap<DbId, Review>,
    pub conversations: HashMap<DbId, Conversation>,
    pub messages: HashMap<DbId, Message>,

    next_service_id: DbId,
    next_vehicle_id: DbId,
    next_booking_id: DbId,
    next_review_id: DbId,
    next_conversation_id: DbId,
    next_message_id: DbId,
}

impl StoreInner {
    pub fn next_service_id(&mut self) -> DbId {
        self.next_service_id += 1;
        self.next_service_id
    }

    pub fn next_vehicle_id(&mut self) -> DbId {
        self.next_vehicle_id += 1;
        self.next_vehicle_id
    }

    pub fn next_booking_id(&mut self) -> DbId {
        self.next_booking_id += 1;
        self.next_booking_id
    }

    pub fn next_review_id(&mut self) -> DbId {
        self.next_review_id += 1;
        self.next_review_id
    }

    pub fn next_conversation_id(&mut self) -> DbId {
        self.next_conversation_id += 1;
        self.next_conversation_id
    }

    pub fn next_message_id(&mut self) -> DbId {
        self.next_message_id += 1;
        self.next_message_id
    }

    /// Join a mechanic profile with its owning user.
    fn mechanic_with_user(&self, profile_id: &str) -> Option<(&MechanicProfile, &User)> {
        let profile = self.mechanics.get(profile_id)?;
        let user = self.users.get(&profile.user_id)?;
        Some((profile, user))
    }
}

/* --------------------------------------------------------------------------
   MemStorage
   -------------------------------------------------------------------------- */

/// Map-backed [`Storage`] implementation.
pub struct MemStorage {
    inner: RwLock<StoreInner>,
    policy: StorePolicy,
}

impl MemStorage {
    /// An empty store (mainly for tests).
    pub fn new(policy: StorePolicy) -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
            policy,
        }
    }

    /// A store pre-populated with the deterministic seed dataset the
    /// service boots with.
    pub fn seeded(policy: StorePolicy) -> Self {
        let mut inner = StoreInner::default();
        crate::seed::populate(&mut inner);
        Self {
            inner: RwLock::new(inner),
            policy,
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new(StorePolicy::default())
    }
}

#[async_trait]
impl Storage for MemStorage {
    /* -- Identity ---------------------------------------------------------- */

    async fn user(&self, id: &str) -> Option<User> {
        self.inner.read().await.users.get(id).cloned()
    }

    async fn user_by_email(&self, email: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    async fn create_user(&self, input: CreateUser) -> Result<User, CoreError> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: input.email,
            name: input.name,
            phone: input.phone,
            role: input.role.unwrap_or_else(|| ROLE_CUSTOMER.to_string()),
            avatar_url: input.avatar_url,
            stripe_customer_id: input.stripe_customer_id,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.id.clone(), user.clone());
        tracing::debug!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    /* -- Catalog ----------------------------------------------------------- */

    async fn services(&self) -> Vec<Service> {
        let inner = self.inner.read().await;
        let mut services: Vec<Service> = inner
            .services
            .values()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        // Sequential ids encode insertion order.
        services.sort_by_key(|s| s.id);
        services
    }

    async fn mechanics(&self) -> Vec<MechanicView> {
        let inner = self.inner.read().await;
        let mut views: Vec<MechanicView> = inner
            .mechanics
            .keys()
            .filter_map(|id| inner.mechanic_with_user(id))
            .map(|(profile, user)| MechanicView::assemble(profile, user))
            .collect();
        views.sort_by(|a, b| a.id.cmp(&b.id));
        views
    }

    async fn mechanic(&self, id: &str) -> Option<MechanicView> {
        let inner = self.inner.read().await;
        inner
            .mechanic_with_user(id)
            .map(|(profile, user)| MechanicView::assemble(profile, user))
    }

    /* -- Vehicles ---------------------------------------------------------- */

    async fn vehicles_for_user(&self, user_id: &str) -> Vec<Vehicle> {
        let inner = self.inner.read().await;
        let mut vehicles: Vec<Vehicle> = inner
            .vehicles
            .values()
            .filter(|v| v.user_id == user_id)
            .cloned()
            .collect();
        vehicles.sort_by_key(|v| v.id);
        vehicles
    }

    async fn create_vehicle(&self, input: CreateVehicle) -> Result<Vehicle, CoreError> {
        let mut inner = self.inner.write().await;
        let vehicle = Vehicle {
            id: inner.next_vehicle_id(),
            user_id: input.user_id,
            make: input.make,
            model: input.model,
            year: input.year,
            license_plate: input.license_plate,
            vin: input.vin,
            created_at: Utc::now(),
        };
        inner.vehicles.insert(vehicle.id, vehicle.clone());
        tracing::debug!(vehicle_id = vehicle.id, user_id = %vehicle.user_id, "Vehicle created");
        Ok(vehicle)
    }

    /* -- Bookings ---------------------------------------------------------- */

    async fn bookings_for_customer(&self, user_id: &str) -> Vec<BookingView> {
        let inner = self.inner.read().await;
        let mut bookings: Vec<Booking> = inner
            .bookings
            .values()
            .filter(|b| b.customer_id == user_id)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.scheduled_date.cmp(&a.scheduled_date));
        bookings
            .into_iter()
            .map(|booking| {
                let service = inner.services.get(&booking.service_id);
                let mechanic = inner.mechanic_with_user(&booking.mechanic_id);
                let vehicle = inner.vehicles.get(&booking.vehicle_id);
                BookingView::assemble(booking, service, mechanic, vehicle)
            })
            .collect()
    }

    async fn booking(&self, id: DbId) -> Option<Booking> {
        self.inner.read().await.bookings.get(&id).cloned()
    }

    async fn create_booking(&self, input: CreateBooking) -> Result<Booking, CoreError> {
        // One write guard across id assignment and fee derivation.
        let mut inner = self.inner.write().await;
        let booking_status = input
            .status
            .unwrap_or_else(|| status::STATUS_PENDING.to_string());
        if self.policy.strict {
            status::validate_status(&booking_status)?;
        }
        let split = FeeSplit::of_total(input.total_price);
        let now = Utc::now();
        let booking = Booking {
            id: inner.next_booking_id(),
            customer_id: input.customer_id,
            mechanic_id: input.mechanic_id,
            vehicle_id: input.vehicle_id,
            service_id: input.service_id,
            status: booking_status,
            scheduled_date: input.scheduled_date,
            location: input.location,
            latitude: input.latitude,
            longitude: input.longitude,
            notes: input.notes,
            total_price: input.total_price,
            platform_fee: split.platform_fee,
            mechanic_payout: split.mechanic_payout,
            stripe_payment_intent_id: None,
            stripe_charge_id: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        };
        inner.bookings.insert(booking.id, booking.clone());
        tracing::info!(
            booking_id = booking.id,
            customer_id = %booking.customer_id,
            total = %booking.total_price,
            "Booking created"
        );
        Ok(booking)
    }

    async fn update_booking_status(
        &self,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Booking>, CoreError> {
        let mut inner = self.inner.write().await;
        let Some(current) = inner.bookings.get(&id).map(|b| b.status.clone()) else {
            return Ok(None);
        };
        if self.policy.strict {
            status::validate_transition(&current, new_status)?;
        }
        let booking = inner
            .bookings
            .get_mut(&id)
            .ok_or_else(|| CoreError::Internal("booking vanished mid-update".into()))?;
        let now = Utc::now();
        booking.status = new_status.to_string();
        booking.updated_at = now;
        // Permissive mode re-stamps completed_at if completed is set
        // again; strict mode never gets here from a terminal status.
        if new_status == status::STATUS_COMPLETED {
            booking.completed_at = Some(now);
        }
        tracing::info!(booking_id = id, status = new_status, "Booking status updated");
        Ok(Some(booking.clone()))
    }

    /* -- Reviews ----------------------------------------------------------- */

    async fn create_review(&self, input: CreateReview) -> Result<Review, CoreError> {
        // One write guard across the insert and the rating fold, so
        // concurrent reviews for the same mechanic cannot lose updates.
        let mut inner = self.inner.write().await;
        if self.policy.strict {
            rating::validate_rating(input.rating)?;
            if inner
                .reviews
                .values()
                .any(|r| r.booking_id == input.booking_id)
            {
                return Err(CoreError::Conflict(format!(
                    "Booking {} already has a review",
                    input.booking_id
                )));
            }
        }
        let review = Review {
            id: inner.next_review_id(),
            booking_id: input.booking_id,
            customer_id: input.customer_id,
            mechanic_id: input.mechanic_id,
            rating: input.rating,
            comment: input.comment,
            created_at: Utc::now(),
        };
        inner.reviews.insert(review.id, review.clone());

        // The review persists even when the mechanic no longer resolves;
        // only the rating fold is skipped then.
        if let Some(profile) = inner.mechanics.get_mut(&review.mechanic_id) {
            profile.rating = rating::fold_review(profile.rating, profile.review_count, review.rating);
            profile.review_count += 1;
            tracing::info!(
                mechanic_id = %review.mechanic_id,
                rating = %profile.rating,
                review_count = profile.review_count,
                "Mechanic rating updated"
            );
        } else {
            tracing::warn!(
                mechanic_id = %review.mechanic_id,
                review_id = review.id,
                "Review persisted for unknown mechanic; rating not updated"
            );
        }
        Ok(review)
    }

    /* -- Conversations & messages ------------------------------------------ */

    async fn conversations_for_customer(&self, user_id: &str) -> Vec<ConversationView> {
        let inner = self.inner.read().await;
        let mut conversations: Vec<Conversation> = inner
            .conversations
            .values()
            .filter(|c| c.customer_id == user_id)
            .cloned()
            .collect();
        conversations.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
        conversations
            .into_iter()
            .map(|conversation| {
                let mechanic = inner.mechanic_with_user(&conversation.mechanic_id);
                ConversationView::assemble(conversation, mechanic)
            })
            .collect()
    }

    async fn messages_in_conversation(&self, conversation_id: DbId) -> Vec<Message> {
        let inner = self.inner.read().await;
        let mut messages: Vec<Message> = inner
            .messages
            .values()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        messages
    }

    async fn create_message(&self, input: CreateMessage) -> Result<Message, CoreError> {
        let mut inner = self.inner.write().await;
        let conversation_exists = inner.conversations.contains_key(&input.conversation_id);
        if self.policy.strict && !conversation_exists {
            return Err(CoreError::not_found("Conversation", input.conversation_id));
        }
        let message = Message {
            id: inner.next_message_id(),
            conversation_id: input.conversation_id,
            sender_id: input.sender_id,
            content: input.content,
            is_read: false,
            created_at: Utc::now(),
        };
        inner.messages.insert(message.id, message.clone());
        if let Some(conversation) = inner.conversations.get_mut(&message.conversation_id) {
            conversation.last_message_at = message.created_at;
        } else {
            // Permissive mode keeps the orphan, as the service always has.
            tracing::warn!(
                conversation_id = message.conversation_id,
                message_id = message.id,
                "Message persisted for unknown conversation"
            );
        }
        Ok(message)
    }

    async fn mark_messages_read(
        &self,
        conversation_id: DbId,
        reader_id: &str,
    ) -> Result<u64, CoreError> {
        let mut inner = self.inner.write().await;
        let mut flipped = 0;
        for message in inner.messages.values_mut() {
            if message.conversation_id == conversation_id
                && message.sender_id != reader_id
                && !message.is_read
            {
                message.is_read = true;
                flipped += 1;
            }
        }
        Ok(flipped)
    }
}
