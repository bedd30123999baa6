//! Route definitions for the `/reservations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reservation;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// ```text
/// GET    /                -> list_reservations
/// POST   /                -> create_reservation
/// GET    /deleted         -> list_deleted_reservations
/// GET    /{id}            -> get_reservation
/// PUT    /{id}            -> update_reservation
/// DELETE /{id}            -> delete_reservation
/// GET    /{id}/payments   -> list_reservation_payments
/// POST   /{id}/charges    -> add_charge
/// POST   /{id}/review     -> add_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route("/deleted", get(reservation::list_deleted_reservations))
        .route(
            "/{id}",
            get(reservation::get_reservation)
                .put(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
        .route(
            "/{id}/payments",
            get(reservation::list_reservation_payments),
        )
        .route("/{id}/charges", post(reservation::add_charge))
        .route("/{id}/review", post(reservation::add_review))
}
