//! Route definitions for the `/stock` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::stock;
use crate::state::AppState;

/// Routes mounted at `/stock`.
///
/// ```text
/// GET    /                -> list_stock_items
/// POST   /                -> create_stock_item
/// GET    /{id}            -> get_stock_item
/// PUT    /{id}            -> update_stock_item
/// DELETE /{id}            -> delete_stock_item
/// POST   /{id}/increase   -> increase_stock
/// POST   /{id}/decrease   -> decrease_stock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(stock::list_stock_items).post(stock::create_stock_item),
        )
        .route(
            "/{id}",
            get(stock::get_stock_item)
                .put(stock::update_stock_item)
                .delete(stock::delete_stock_item),
        )
        .route("/{id}/increase", post(stock::increase_stock))
        .route("/{id}/decrease", post(stock::decrease_stock))
}
