//! Guest reviews left against a reservation.

use hotel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerReview {
    pub id: DbId,
    pub reservation_id: DbId,
    pub rating: i16,
    pub comment: Option<String>,
    pub reviewed_at: Timestamp,
}

/// Request body for `POST /reservations/{id}/review`.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub rating: i16,
    pub comment: Option<String>,
}
