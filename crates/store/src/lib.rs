//! Curbside storage layer.
//!
//! Owns every entity collection and is the only code path allowed to
//! mutate them. The [`storage::Storage`] trait is the seam between the
//! HTTP boundary and the backing store; [`memory::MemStorage`] is the
//! in-process map-backed implementation the service runs on today, and
//! a durable implementation can slot in behind the same trait later.

pub mod memory;
pub mod models;
pub mod seed;
pub mod storage;
pub mod views;

pub use memory::{MemStorage, StorePolicy};
pub use storage::Storage;
