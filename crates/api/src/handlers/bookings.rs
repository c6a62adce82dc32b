//! Booking lifecycle handlers.
//!
//! Creation derives the 20/80 fee split inside the store; status
//! transitions stamp `updated_at` and, for `completed`, `completed_at`.
//! The enriched list resolves service/mechanic/vehicle at read time, so
//! it always reflects the current catalog and profile state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use curbside_core::error::CoreError;
use curbside_core::types::DbId;
use curbside_store::models::CreateBooking;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users/{id}/bookings
///
/// A customer's bookings, enriched, most recent scheduled first.
pub async fn list_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let bookings = state.store.bookings_for_customer(&user_id).await;
    Ok(Json(bookings))
}

/// GET /api/bookings/{id}
///
/// Single booking, raw (unenriched).
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = state
        .store
        .booking(id)
        .await
        .ok_or_else(|| AppError::Core(CoreError::not_found("Booking", id)))?;
    Ok(Json(booking))
}

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<impl IntoResponse> {
    let booking = state.store.create_booking(input).await?;

    tracing::info!(
        booking_id = booking.id,
        customer_id = %booking.customer_id,
        mechanic_id = %booking.mechanic_id,
        total = %booking.total_price,
        platform_fee = %booking.platform_fee,
        "Booking created"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Request body for a status transition.
#[derive(Debug, serde::Deserialize)]
pub struct UpdateStatusInput {
    pub status: String,
}

/// PATCH /api/bookings/{id}/status
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusInput>,
) -> AppResult<impl IntoResponse> {
    let booking = state
        .store
        .update_booking_status(id, &input.status)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Booking", id)))?;

    tracing::info!(booking_id = id, status = %input.status, "Booking status updated");

    Ok(Json(booking))
}
