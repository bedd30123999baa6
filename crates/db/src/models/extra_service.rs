//! Extra service (room service, spa, laundry, ...) model and DTOs.

use hotel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `extra_services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExtraService {
    pub id: DbId,
    pub name: String,
    pub unit_price: f64,
    pub category: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateExtraService {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "unit_price must not be negative"))]
    pub unit_price: f64,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExtraService {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "unit_price must not be negative"))]
    pub unit_price: Option<f64>,
    pub category: Option<String>,
}

/// Body for `PUT /services/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateServiceStatus {
    pub is_active: bool,
}
