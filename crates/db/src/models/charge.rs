//! Extra-service charges billed to a reservation.

use hotel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `customer_charges` joined with the service name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerCharge {
    pub id: DbId,
    pub reservation_id: DbId,
    pub service_id: DbId,
    pub service_name: String,
    pub quantity: i32,
    pub total_price: f64,
    pub charged_at: Timestamp,
}

/// Request body for `POST /reservations/{id}/charges`.
#[derive(Debug, Deserialize)]
pub struct CreateChargeRequest {
    pub service_id: DbId,
    pub quantity: i32,
}

/// Insert DTO; `total_price` is computed by the caller.
#[derive(Debug)]
pub struct CreateCharge {
    pub reservation_id: DbId,
    pub service_id: DbId,
    pub quantity: i32,
    pub total_price: f64,
}
