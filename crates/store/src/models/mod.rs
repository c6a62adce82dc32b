//! Entity models.
//!
//! One file per entity, each with the stored record plus the DTO used to
//! create it where a write path exists. Serialized field names are
//! camelCase because these records cross the HTTP boundary unchanged and
//! the mobile client already speaks that format. Monetary fields are
//! `Decimal` and serialize as decimal strings; the lossy float coercion
//! happens only in the `views` module.

pub mod booking;
pub mod conversation;
pub mod mechanic;
pub mod review;
pub mod service;
pub mod user;
pub mod vehicle;

pub use booking::{Booking, CreateBooking};
pub use conversation::{Conversation, CreateMessage, Message};
pub use mechanic::MechanicProfile;
pub use review::{CreateReview, Review};
pub use service::Service;
pub use user::{CreateUser, User};
pub use vehicle::{CreateVehicle, Vehicle};
