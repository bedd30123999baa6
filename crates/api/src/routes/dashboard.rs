//! Route definitions for the `/dashboard` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /stats                 -> stats
/// GET /active-reservations   -> active_reservations
/// GET /todays-events         -> todays_events
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard::stats))
        .route("/active-reservations", get(dashboard::active_reservations))
        .route("/todays-events", get(dashboard::todays_events))
}
