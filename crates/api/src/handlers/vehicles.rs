use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use curbside_store::models::CreateVehicle;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/users/{id}/vehicles
pub async fn list_vehicles(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let vehicles = state.store.vehicles_for_user(&user_id).await;
    Ok(Json(vehicles))
}

/// POST /api/vehicles
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(input): Json<CreateVehicle>,
) -> AppResult<impl IntoResponse> {
    let vehicle = state.store.create_vehicle(input).await?;

    tracing::info!(
        vehicle_id = vehicle.id,
        user_id = %vehicle.user_id,
        "Vehicle registered"
    );

    Ok((StatusCode::CREATED, Json(vehicle)))
}
