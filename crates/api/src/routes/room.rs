//! Route definitions for the `/rooms` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::room;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// GET    /                    -> list_rooms
/// POST   /                    -> create_room
/// GET    /available           -> list_available_rooms
/// GET    /{id}                -> get_room
/// PUT    /{id}                -> update_room
/// DELETE /{id}                -> delete_room
/// PUT    /{id}/status         -> update_room_status
/// GET    /{id}/availability   -> check_availability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(room::list_rooms).post(room::create_room))
        .route("/available", get(room::list_available_rooms))
        .route(
            "/{id}",
            get(room::get_room)
                .put(room::update_room)
                .delete(room::delete_room),
        )
        .route("/{id}/status", put(room::update_room_status))
        .route("/{id}/availability", get(room::check_availability))
}
