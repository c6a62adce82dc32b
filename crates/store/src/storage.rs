//! The storage seam.
//!
//! Handlers only ever talk to `dyn Storage`, so the backing store is
//! swappable: [`crate::MemStorage`] today, a durable implementation
//! later, without touching a call site. Id generation (UUIDs for users,
//! sequential ids for everything else) lives behind this trait too.
//!
//! Read paths return `Option`/`Vec` directly and never fail; a miss is
//! an absent value, not an error. Write paths return `Result` because
//! strict mode can reject them (see [`crate::StorePolicy`]); in the
//! default permissive mode they only fail on genuinely impossible
//! states.

use async_trait::async_trait;

use curbside_core::error::CoreError;
use curbside_core::types::DbId;

use crate::models::{
    Booking, CreateBooking, CreateMessage, CreateReview, CreateUser, CreateVehicle, Message,
    Review, Service, User, Vehicle,
};
use crate::views::{BookingView, ConversationView, MechanicView};

#[async_trait]
pub trait Storage: Send + Sync {
    /* -- Identity ---------------------------------------------------------- */

    /// Exact-match lookup by id.
    async fn user(&self, id: &str) -> Option<User>;

    /// Exact-match lookup by email.
    async fn user_by_email(&self, email: &str) -> Option<User>;

    /// Create a user with a fresh UUID, defaulting `role` to `customer`.
    async fn create_user(&self, input: CreateUser) -> Result<User, CoreError>;

    /* -- Catalog ----------------------------------------------------------- */

    /// Active services only, insertion order.
    async fn services(&self) -> Vec<Service>;

    /// Every mechanic profile joined with its owning user. Profiles
    /// whose user record is missing are skipped.
    async fn mechanics(&self) -> Vec<MechanicView>;

    /// Single mechanic joined with its owning user.
    async fn mechanic(&self, id: &str) -> Option<MechanicView>;

    /* -- Vehicles ---------------------------------------------------------- */

    /// All vehicles owned by a user, insertion order.
    async fn vehicles_for_user(&self, user_id: &str) -> Vec<Vehicle>;

    /// Register a vehicle with the next sequential id.
    async fn create_vehicle(&self, input: CreateVehicle) -> Result<Vehicle, CoreError>;

    /* -- Bookings ---------------------------------------------------------- */

    /// A customer's bookings, enriched, sorted by `scheduled_date`
    /// descending.
    async fn bookings_for_customer(&self, user_id: &str) -> Vec<BookingView>;

    /// Raw (unenriched) booking lookup.
    async fn booking(&self, id: DbId) -> Option<Booking>;

    /// Create a booking: assigns the next sequential id, defaults the
    /// status to `pending`, and derives the 20/80 fee split from
    /// `total_price` exactly once. Id assignment and fee computation
    /// happen under one write lock.
    async fn create_booking(&self, input: CreateBooking) -> Result<Booking, CoreError>;

    /// Transition a booking's status, advancing `updated_at` and
    /// stamping `completed_at` on the transition to `completed`.
    /// Returns `Ok(None)` when the id is unknown.
    async fn update_booking_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, CoreError>;

    /* -- Reviews ----------------------------------------------------------- */

    /// Persist a review and fold its rating into the mechanic's running
    /// average. If the mechanic no longer resolves, the review is still
    /// persisted and the rating update is skipped.
    async fn create_review(&self, input: CreateReview) -> Result<Review, CoreError>;

    /* -- Conversations & messages ------------------------------------------ */

    /// A customer's conversations, enriched, sorted by
    /// `last_message_at` descending.
    async fn conversations_for_customer(&self, user_id: &str) -> Vec<ConversationView>;

    /// Messages in a conversation, chronological.
    async fn messages_in_conversation(&self, conversation_id: DbId) -> Vec<Message>;

    /// Append a message and bump the parent conversation's
    /// `last_message_at`. A message into a nonexistent conversation is
    /// persisted as an orphan in permissive mode.
    async fn create_message(&self, input: CreateMessage) -> Result<Message, CoreError>;

    /// Mark every message in a conversation not sent by `reader_id` as
    /// read. Returns the number of messages flipped.
    async fn mark_messages_read(
        &self,
        conversation_id: DbId,
        reader_id: &str,
    ) -> Result<u64, CoreError>;
}
