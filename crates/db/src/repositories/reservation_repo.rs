//! Repository for the `reservations` table.
//!
//! Writes that touch availability ([`ReservationRepo::book`],
//! [`ReservationRepo::update`], [`ReservationRepo::delete_with_audit`]) run as
//! a single transaction: the affected room rows are locked with
//! `SELECT ... FOR UPDATE`, the overlap query runs under that lock, and the
//! reservation write and room status change commit together. Two concurrent
//! bookings for the same room therefore serialize on the room row, and at
//! most one of two overlapping requests can succeed.

use hotel_core::billing::stay_charge;
use hotel_core::error::CoreError;
use hotel_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use hotel_core::status::{
    blocking_reservation_status_ids, ReservationStatus, RoomStatus, StatusId,
};
use hotel_core::stay::StayInterval;
use hotel_core::types::DbId;
use hotel_core::validation::validate_guest_counts;
use sqlx::{FromRow, PgConnection, PgExecutor, PgPool};

use crate::models::reservation::{
    DeletedReservation, NewBooking, Reservation, ReservationDetail, ReservationListParams,
    UpdateReservation,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, room_id, check_in, check_out, adults, children, \
                        total_charge, status_id, created_at, updated_at";

/// Columns for [`ReservationDetail`]; expects aliases `r`, `c`, `rm`.
const DETAIL_COLUMNS: &str = "r.id, r.customer_id, c.first_name || ' ' || c.last_name AS customer_name, \
                               r.room_id, rm.room_number, r.check_in, r.check_out, r.adults, \
                               r.children, r.total_charge, r.status_id, r.created_at";

const DETAIL_FROM: &str = "reservations r \
                           JOIN customers c ON c.id = r.customer_id \
                           JOIN rooms rm ON rm.id = r.room_id";

const LOG_COLUMNS: &str = "id, reservation_id, customer_id, room_id, check_in, check_out, \
                            deleted_by, deleted_at, reason";

/// Reason recorded when the caller does not give one.
pub const DEFAULT_DELETE_REASON: &str = "Deleted by staff";

/// Why a booking write was refused.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Room with id {0} not found")]
    RoomNotFound(DbId),

    #[error("Customer with id {0} not found")]
    CustomerNotFound(DbId),

    #[error("Reservation with id {0} not found")]
    ReservationNotFound(DbId),

    /// The room's housekeeping status is not `available`.
    #[error("Room {room_id} is not available for booking (status: {status})")]
    RoomNotAvailable { room_id: DbId, status: String },

    /// A pending or active reservation already holds the room for part of the stay.
    #[error("Room {room_id} already has a reservation overlapping {interval}")]
    DatesOverlap {
        room_id: DbId,
        interval: StayInterval,
    },

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// The columns of a locked room row that booking needs.
#[derive(Debug, FromRow)]
struct RoomLock {
    id: DbId,
    nightly_rate: f64,
    status_id: StatusId,
}

fn room_status_label(status_id: StatusId) -> String {
    RoomStatus::from_id(status_id)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| format!("unknown ({status_id})"))
}

/// Provides reads and transactional writes for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    // -----------------------------------------------------------------------
    // Availability
    // -----------------------------------------------------------------------

    /// `true` when no pending or active reservation for `room_id` overlaps
    /// `interval`, ignoring `exclude_reservation_id`.
    ///
    /// Accepts a pool or an open transaction.
    pub async fn is_available<'e, E>(
        executor: E,
        room_id: DbId,
        interval: &StayInterval,
        exclude_reservation_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (conflicts,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM reservations
             WHERE room_id = $1
               AND status_id = ANY($2)
               AND check_out > $3
               AND check_in < $4
               AND ($5::BIGINT IS NULL OR id <> $5)",
        )
        .bind(room_id)
        .bind(blocking_reservation_status_ids())
        .bind(interval.check_in())
        .bind(interval.check_out())
        .bind(exclude_reservation_id)
        .fetch_one(executor)
        .await?;
        Ok(conflicts == 0)
    }

    // -----------------------------------------------------------------------
    // Transactional writes
    // -----------------------------------------------------------------------

    /// Create a reservation and mark its room occupied, atomically.
    ///
    /// Checks, in order: room exists, room status is `available`, customer
    /// exists, no overlapping blocking reservation. The charge is the room's
    /// nightly rate times the nights in the stay.
    pub async fn book(pool: &PgPool, booking: &NewBooking) -> Result<Reservation, BookingError> {
        let mut tx = pool.begin().await?;

        let room = lock_rooms(&mut tx, &[booking.room_id])
            .await?
            .into_iter()
            .next()
            .ok_or(BookingError::RoomNotFound(booking.room_id))?;

        if room.status_id != RoomStatus::Available.id() {
            tracing::debug!(
                room_id = room.id,
                room_status = room.status_id,
                "Booking refused, room not available",
            );
            return Err(BookingError::RoomNotAvailable {
                room_id: room.id,
                status: room_status_label(room.status_id),
            });
        }

        if !customer_exists(&mut tx, booking.customer_id).await? {
            return Err(BookingError::CustomerNotFound(booking.customer_id));
        }

        if !Self::is_available(&mut *tx, room.id, &booking.interval, None).await? {
            tracing::debug!(
                room_id = room.id,
                interval = %booking.interval,
                "Booking refused, dates overlap",
            );
            return Err(BookingError::DatesOverlap {
                room_id: room.id,
                interval: booking.interval,
            });
        }

        let total_charge = stay_charge(room.nightly_rate, &booking.interval);

        let query = format!(
            "INSERT INTO reservations
                (customer_id, room_id, check_in, check_out, adults, children, total_charge, status_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let reservation = sqlx::query_as::<_, Reservation>(&query)
            .bind(booking.customer_id)
            .bind(room.id)
            .bind(booking.interval.check_in())
            .bind(booking.interval.check_out())
            .bind(booking.adults)
            .bind(booking.children)
            .bind(total_charge)
            .bind(booking.status.id())
            .fetch_one(&mut *tx)
            .await?;

        set_room_status(&mut tx, room.id, booking.status.room_status_after()).await?;

        tx.commit().await?;
        Ok(reservation)
    }

    /// Apply a partial update, re-validating and re-pricing the stay.
    ///
    /// The overlap check excludes the reservation itself and is skipped when
    /// the new status no longer blocks the room.
    ///
    /// Room status is only written when the room held by the reservation
    /// changes: a room it stops holding (cancelled, completed, or moved away
    /// from) becomes available, and a room it starts holding must be available
    /// and becomes occupied. Edits to a reservation that blocks neither before
    /// nor after leave every room untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReservation,
    ) -> Result<Reservation, BookingError> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1 FOR UPDATE");
        let current = sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(BookingError::ReservationNotFound(id))?;

        let interval = StayInterval::new(
            input.check_in.unwrap_or(current.check_in),
            input.check_out.unwrap_or(current.check_out),
        )?;

        let status_id = input.status_id.unwrap_or(current.status_id);
        let status = ReservationStatus::from_id(status_id).ok_or_else(|| {
            CoreError::Validation(format!("Unknown reservation status_id {status_id}"))
        })?;

        let adults = input.adults.unwrap_or(current.adults);
        let children = input.children.unwrap_or(current.children);
        validate_guest_counts(adults, children)?;

        let room_id = input.room_id.unwrap_or(current.room_id);
        let moving = room_id != current.room_id;
        let room_ids = if moving {
            vec![room_id, current.room_id]
        } else {
            vec![room_id]
        };
        let locked = lock_rooms(&mut tx, &room_ids).await?;
        let target = locked
            .iter()
            .find(|r| r.id == room_id)
            .ok_or(BookingError::RoomNotFound(room_id))?;

        // The reservation takes hold of `room_id` only when it blocks afterwards
        // and did not already block that same room.
        let claims_target =
            status.blocks_availability() && (moving || !current.blocks_availability());
        let releases_current =
            current.blocks_availability() && (moving || !status.blocks_availability());

        if claims_target && target.status_id != RoomStatus::Available.id() {
            tracing::debug!(
                reservation_id = id,
                room_id,
                room_status = target.status_id,
                "Update refused, target room not available",
            );
            return Err(BookingError::RoomNotAvailable {
                room_id,
                status: room_status_label(target.status_id),
            });
        }

        let customer_id = input.customer_id.unwrap_or(current.customer_id);
        if customer_id != current.customer_id && !customer_exists(&mut tx, customer_id).await? {
            return Err(BookingError::CustomerNotFound(customer_id));
        }

        if status.blocks_availability()
            && !Self::is_available(&mut *tx, room_id, &interval, Some(id)).await?
        {
            tracing::debug!(
                reservation_id = id,
                room_id,
                interval = %interval,
                "Update refused, dates overlap",
            );
            return Err(BookingError::DatesOverlap { room_id, interval });
        }

        let total_charge = stay_charge(target.nightly_rate, &interval);

        let query = format!(
            "UPDATE reservations SET
                customer_id = $2,
                room_id = $3,
                check_in = $4,
                check_out = $5,
                adults = $6,
                children = $7,
                total_charge = $8,
                status_id = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(customer_id)
            .bind(room_id)
            .bind(interval.check_in())
            .bind(interval.check_out())
            .bind(adults)
            .bind(children)
            .bind(total_charge)
            .bind(status.id())
            .fetch_one(&mut *tx)
            .await?;

        if releases_current {
            set_room_status(&mut tx, current.room_id, RoomStatus::Available).await?;
        }
        if claims_target {
            set_room_status(&mut tx, room_id, status.room_status_after()).await?;
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete a reservation, write the audit record, and free its room.
    ///
    /// The room is only released when the deleted reservation was still
    /// holding it (pending or active).
    pub async fn delete_with_audit(
        pool: &PgPool,
        id: DbId,
        deleted_by: Option<DbId>,
        reason: &str,
    ) -> Result<DeletedReservation, BookingError> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1 FOR UPDATE");
        let current = sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(BookingError::ReservationNotFound(id))?;

        if current.blocks_availability() {
            lock_rooms(&mut tx, &[current.room_id]).await?;
        }

        let query = format!(
            "INSERT INTO deleted_reservation_log
                (reservation_id, customer_id, room_id, check_in, check_out, deleted_by, reason)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {LOG_COLUMNS}"
        );
        let entry = sqlx::query_as::<_, DeletedReservation>(&query)
            .bind(current.id)
            .bind(current.customer_id)
            .bind(current.room_id)
            .bind(current.check_in)
            .bind(current.check_out)
            .bind(deleted_by)
            .bind(reason)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if current.blocks_availability() {
            set_room_status(&mut tx, current.room_id, RoomStatus::Available).await?;
        }

        tx.commit().await?;
        Ok(entry)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reservations with guest and room names, most recent stay first.
    pub async fn list(
        pool: &PgPool,
        params: &ReservationListParams,
    ) -> Result<Vec<ReservationDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM}
             WHERE ($1::SMALLINT IS NULL OR r.status_id = $1)
               AND ($2::BIGINT IS NULL OR r.room_id = $2)
               AND ($3::BIGINT IS NULL OR r.customer_id = $3)
             ORDER BY r.check_in DESC, r.id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, ReservationDetail>(&query)
            .bind(params.status_id)
            .bind(params.room_id)
            .bind(params.customer_id)
            .bind(clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT))
            .bind(clamp_offset(params.offset))
            .fetch_all(pool)
            .await
    }

    /// Pending and active reservations ordered by check-in date.
    pub async fn list_blocking(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ReservationDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM}
             WHERE r.status_id = ANY($1)
             ORDER BY r.check_in, r.id
             LIMIT $2"
        );
        sqlx::query_as::<_, ReservationDetail>(&query)
            .bind(blocking_reservation_status_ids())
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Audit records for deleted reservations, newest first.
    pub async fn list_deleted(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<DeletedReservation>, sqlx::Error> {
        let query = format!(
            "SELECT {LOG_COLUMNS} FROM deleted_reservation_log
             ORDER BY deleted_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, DeletedReservation>(&query)
            .bind(clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Transaction helpers
// ---------------------------------------------------------------------------

/// Lock the given rooms in id order and return the ones that exist.
async fn lock_rooms(conn: &mut PgConnection, ids: &[DbId]) -> Result<Vec<RoomLock>, sqlx::Error> {
    sqlx::query_as::<_, RoomLock>(
        "SELECT id, nightly_rate, status_id FROM rooms
         WHERE id = ANY($1)
         ORDER BY id
         FOR UPDATE",
    )
    .bind(ids)
    .fetch_all(conn)
    .await
}

async fn customer_exists(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM customers WHERE id = $1)")
        .bind(id)
        .fetch_one(conn)
        .await?;
    Ok(exists)
}

async fn set_room_status(
    conn: &mut PgConnection,
    room_id: DbId,
    status: RoomStatus,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE rooms SET status_id = $2 WHERE id = $1")
        .bind(room_id)
        .bind(status.id())
        .execute(conn)
        .await?;
    tracing::debug!(room_id, room_status = status.label(), "Room status set");
    Ok(())
}
