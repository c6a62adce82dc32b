use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use curbside_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = state
        .store
        .user(&id)
        .await
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", &id)))?;
    Ok(Json(user))
}
