//! Reservation entity model, DTOs, and the deleted-reservation audit record.

use hotel_core::error::CoreError;
use hotel_core::status::{ReservationStatus, StatusId};
use hotel_core::stay::{BookedStay, StayInterval};
use hotel_core::types::{DbId, StayDate, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reservations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub customer_id: DbId,
    pub room_id: DbId,
    pub check_in: StayDate,
    pub check_out: StayDate,
    pub adults: i32,
    pub children: i32,
    pub total_charge: f64,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Reservation {
    /// The stored stay. The table's CHECK constraint guarantees it is non-empty.
    pub fn interval(&self) -> Result<StayInterval, CoreError> {
        StayInterval::new(self.check_in, self.check_out)
    }

    pub fn status(&self) -> Option<ReservationStatus> {
        ReservationStatus::from_id(self.status_id)
    }

    pub fn blocks_availability(&self) -> bool {
        self.status().is_some_and(ReservationStatus::blocks_availability)
    }

    /// View of this row as input to the in-memory availability rule.
    pub fn as_booked_stay(&self) -> Result<BookedStay, CoreError> {
        let status = self.status().ok_or_else(|| {
            CoreError::Internal(format!(
                "Reservation {} has unknown status_id {}",
                self.id, self.status_id
            ))
        })?;
        Ok(BookedStay {
            reservation_id: self.id,
            room_id: self.room_id,
            status,
            interval: self.interval()?,
        })
    }
}

/// A reservation joined with the guest name and room number, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReservationDetail {
    pub id: DbId,
    pub customer_id: DbId,
    pub customer_name: String,
    pub room_id: DbId,
    pub room_number: String,
    pub check_in: StayDate,
    pub check_out: StayDate,
    pub adults: i32,
    pub children: i32,
    pub total_charge: f64,
    pub status_id: StatusId,
    pub created_at: Timestamp,
}

/// Request body for creating a reservation.
#[derive(Debug, Deserialize)]
pub struct CreateReservation {
    pub customer_id: DbId,
    pub room_id: DbId,
    pub check_in: StayDate,
    pub check_out: StayDate,
    /// Defaults to 1.
    pub adults: Option<i32>,
    /// Defaults to 0.
    pub children: Option<i32>,
    /// Defaults to `active`. Only blocking statuses are accepted at creation.
    pub status_id: Option<StatusId>,
}

/// Validated booking handed to the repository's unit of work.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub customer_id: DbId,
    pub room_id: DbId,
    pub interval: StayInterval,
    pub adults: i32,
    pub children: i32,
    pub status: ReservationStatus,
}

/// DTO for updating a reservation. All fields are optional; omitted fields
/// keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateReservation {
    pub customer_id: Option<DbId>,
    pub room_id: Option<DbId>,
    pub check_in: Option<StayDate>,
    pub check_out: Option<StayDate>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub status_id: Option<StatusId>,
}

/// Filters for `GET /reservations`.
#[derive(Debug, Default, Deserialize)]
pub struct ReservationListParams {
    pub status_id: Option<StatusId>,
    pub room_id: Option<DbId>,
    pub customer_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A row from `deleted_reservation_log`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeletedReservation {
    pub id: DbId,
    pub reservation_id: DbId,
    pub customer_id: DbId,
    pub room_id: DbId,
    pub check_in: StayDate,
    pub check_out: StayDate,
    pub deleted_by: Option<DbId>,
    pub deleted_at: Timestamp,
    pub reason: String,
}
