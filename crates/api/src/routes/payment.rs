//! Route definitions for the `/payments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// GET    /       -> list_payments
/// POST   /       -> create_payment
/// GET    /{id}   -> get_payment
/// PUT    /{id}   -> update_payment
/// DELETE /{id}   -> delete_payment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(payment::list_payments).post(payment::create_payment))
        .route(
            "/{id}",
            get(payment::get_payment)
                .put(payment::update_payment)
                .delete(payment::delete_payment),
        )
}
