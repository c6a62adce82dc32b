//! Curbside domain core.
//!
//! Pure domain types and logic shared by the storage and API crates:
//! identifier/timestamp aliases, the domain error enum, booking status
//! rules, fee-split arithmetic, and the mechanic rating running average.
//! This crate performs no I/O.

pub mod booking;
pub mod error;
pub mod money;
pub mod rating;
pub mod types;
