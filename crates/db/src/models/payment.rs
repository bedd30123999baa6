//! Payment entity model and DTOs.

use hotel_core::status::StatusId;
use hotel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `payments` table, with the paying customer resolved
/// through its reservation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub reservation_id: DbId,
    pub customer_id: DbId,
    pub amount: f64,
    pub method_id: StatusId,
    pub paid_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a payment.
#[derive(Debug, Deserialize)]
pub struct CreatePayment {
    pub reservation_id: DbId,
    pub amount: f64,
    pub method_id: StatusId,
    /// Defaults to now.
    pub paid_at: Option<Timestamp>,
}

/// DTO for correcting a payment. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdatePayment {
    pub amount: Option<f64>,
    pub method_id: Option<StatusId>,
    pub paid_at: Option<Timestamp>,
}
