use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use curbside_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/mechanics
///
/// List every mechanic, profile flattened with its owning user.
pub async fn list_mechanics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mechanics = state.store.mechanics().await;
    Ok(Json(mechanics))
}

/// GET /api/mechanics/{id}
pub async fn get_mechanic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mechanic = state
        .store
        .mechanic(&id)
        .await
        .ok_or_else(|| AppError::Core(CoreError::not_found("Mechanic", &id)))?;
    Ok(Json(mechanic))
}
