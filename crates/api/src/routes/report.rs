//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET /monthly        -> monthly_revenue
/// GET /reservations   -> reservation_report (?from=&to=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/monthly", get(report::monthly_revenue))
        .route("/reservations", get(report::reservation_report))
}
