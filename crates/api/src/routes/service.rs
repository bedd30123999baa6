//! Route definitions for the `/services` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::service;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /              -> list_services (?include_inactive=)
/// POST   /              -> create_service
/// GET    /{id}          -> get_service
/// PUT    /{id}          -> update_service
/// DELETE /{id}          -> delete_service
/// PUT    /{id}/status   -> update_service_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(service::list_services).post(service::create_service),
        )
        .route(
            "/{id}",
            get(service::get_service)
                .put(service::update_service)
                .delete(service::delete_service),
        )
        .route("/{id}/status", put(service::update_service_status))
}
