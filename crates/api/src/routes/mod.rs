pub mod health;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /services                        list active services
///
/// /mechanics                       list mechanics (flattened view)
/// /mechanics/{id}                  single mechanic
///
/// /users/{id}                      fetch user
/// /users/{id}/vehicles             list a user's vehicles
/// /users/{id}/bookings             enriched booking list
/// /users/{id}/conversations        enriched conversation list
///
/// /vehicles                        create vehicle (POST)
///
/// /bookings                        create booking (POST)
/// /bookings/{id}                   single booking (raw)
/// /bookings/{id}/status            transition status (PATCH)
///
/// /conversations/{id}/messages     chronological message list
/// /conversations/{id}/read         mark messages read (PATCH)
/// /messages                        append message (POST)
///
/// /reviews                         submit review (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(handlers::services::list_services))
        .route("/mechanics", get(handlers::mechanics::list_mechanics))
        .route("/mechanics/{id}", get(handlers::mechanics::get_mechanic))
        .route("/users/{id}", get(handlers::users::get_user))
        .route("/users/{id}/vehicles", get(handlers::vehicles::list_vehicles))
        .route("/vehicles", post(handlers::vehicles::create_vehicle))
        .route("/users/{id}/bookings", get(handlers::bookings::list_bookings))
        .route("/bookings", post(handlers::bookings::create_booking))
        .route("/bookings/{id}", get(handlers::bookings::get_booking))
        .route(
            "/bookings/{id}/status",
            patch(handlers::bookings::update_booking_status),
        )
        .route(
            "/users/{id}/conversations",
            get(handlers::conversations::list_conversations),
        )
        .route(
            "/conversations/{id}/messages",
            get(handlers::conversations::list_messages),
        )
        .route(
            "/conversations/{id}/read",
            patch(handlers::conversations::mark_read),
        )
        .route("/messages", post(handlers::conversations::create_message))
        .route("/reviews", post(handlers::reviews::create_review))
}
