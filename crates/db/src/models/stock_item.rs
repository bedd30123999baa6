//! Warehouse stock model and DTOs.

use hotel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `stock_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StockItem {
    pub id: DbId,
    /// Extra service this item is consumed by, if any.
    pub service_id: Option<DbId>,
    pub name: String,
    pub quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStockItem {
    pub service_id: Option<DbId>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStockItem {
    pub service_id: Option<DbId>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: Option<i32>,
}

/// Body for `POST /stock/{id}/increase` and `/decrease`.
#[derive(Debug, Deserialize)]
pub struct StockAdjustmentRequest {
    pub amount: i32,
}
