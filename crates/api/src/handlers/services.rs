use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/services
///
/// List active catalog services.
pub async fn list_services(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let services = state.store.services().await;
    Ok(Json(services))
}
