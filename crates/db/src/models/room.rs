//! Room entity model and DTOs.

use hotel_core::status::{RoomStatus, StatusId};
use hotel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub room_number: String,
    pub room_type: String,
    pub nightly_rate: f64,
    pub status_id: StatusId,
    pub view: Option<String>,
    pub square_meters: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Room {
    pub fn status(&self) -> Option<RoomStatus> {
        RoomStatus::from_id(self.status_id)
    }

    pub fn is_bookable(&self) -> bool {
        self.status() == Some(RoomStatus::Available)
    }
}

/// DTO for creating a new room.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoom {
    #[validate(length(min = 1, message = "room_number must not be empty"))]
    pub room_number: String,
    pub room_type: String,
    #[validate(range(min = 0.0, message = "nightly_rate must not be negative"))]
    pub nightly_rate: f64,
    /// Defaults to `available` when omitted.
    pub status_id: Option<StatusId>,
    pub view: Option<String>,
    #[validate(range(min = 1, message = "square_meters must be positive"))]
    pub square_meters: Option<i32>,
}

/// DTO for updating a room. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoom {
    #[validate(length(min = 1, message = "room_number must not be empty"))]
    pub room_number: Option<String>,
    pub room_type: Option<String>,
    #[validate(range(min = 0.0, message = "nightly_rate must not be negative"))]
    pub nightly_rate: Option<f64>,
    pub status_id: Option<StatusId>,
    pub view: Option<String>,
    #[validate(range(min = 1, message = "square_meters must be positive"))]
    pub square_meters: Option<i32>,
}

/// Body for `PUT /rooms/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateRoomStatus {
    pub status_id: StatusId,
}
