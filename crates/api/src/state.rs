use std::sync::Arc;

use curbside_store::Storage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The storage engine. Trait-object so the in-memory store and any
    /// future durable store are interchangeable at this seam.
    pub store: Arc<dyn Storage>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
