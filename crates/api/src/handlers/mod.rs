//! HTTP handlers, one module per resource.
//!
//! Handlers are thin: extract, call the storage trait, serialize. The
//! repository returns absent values for missing ids; handlers turn those
//! into 404s. Business-rule rejections (strict mode only) surface as
//! 400/409 via [`crate::error::AppError`].

pub mod bookings;
pub mod conversations;
pub mod mechanics;
pub mod reviews;
pub mod services;
pub mod users;
pub mod vehicles;
