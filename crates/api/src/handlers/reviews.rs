use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use curbside_store::models::CreateReview;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/reviews
///
/// Persist a review and fold its rating into the mechanic's running
/// average. The review is stored even when the mechanic no longer
/// resolves; only the rating update is skipped then.
pub async fn create_review(
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    let review = state.store.create_review(input).await?;

    tracing::info!(
        review_id = review.id,
        booking_id = review.booking_id,
        mechanic_id = %review.mechanic_id,
        rating = review.rating,
        "Review submitted"
    );

    Ok((StatusCode::CREATED, Json(review)))
}
