//! Route definitions for the `/customers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

/// Routes mounted at `/customers`.
///
/// ```text
/// GET    /                -> list_customers (?search=&limit=&offset=)
/// POST   /                -> create_customer
/// GET    /{id}            -> get_customer
/// PUT    /{id}            -> update_customer
/// DELETE /{id}            -> delete_customer
/// GET    /{id}/charges    -> list_customer_charges
/// GET    /{id}/reviews    -> list_customer_reviews
/// GET    /{id}/payments   -> list_customer_payments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(customer::list_customers).post(customer::create_customer),
        )
        .route(
            "/{id}",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        )
        .route("/{id}/charges", get(customer::list_customer_charges))
        .route("/{id}/reviews", get(customer::list_customer_reviews))
        .route("/{id}/payments", get(customer::list_customer_payments))
}
