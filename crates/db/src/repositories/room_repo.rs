//! Repository for the `rooms` table.

use hotel_core::status::{blocking_reservation_status_ids, RoomStatus, StatusId};
use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::room::{CreateRoom, Room, UpdateRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_number, room_type, nightly_rate, status_id, view, \
                        square_meters, created_at, updated_at";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room. A missing `status_id` defaults to available.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (room_number, room_type, nightly_rate, status_id, view, square_meters)
             VALUES ($1, $2, $3, COALESCE($4, $5), $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.room_number)
            .bind(&input.room_type)
            .bind(input.nightly_rate)
            .bind(input.status_id)
            .bind(RoomStatus::Available.id())
            .bind(&input.view)
            .bind(input.square_meters)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rooms ordered by room number.
    pub async fn list(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms ORDER BY room_number");
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// List rooms currently in the given housekeeping status.
    pub async fn list_by_status(
        pool: &PgPool,
        status: RoomStatus,
    ) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE status_id = $1 ORDER BY room_number");
        sqlx::query_as::<_, Room>(&query)
            .bind(status.id())
            .fetch_all(pool)
            .await
    }

    /// Update a room. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                room_number = COALESCE($2, room_number),
                room_type = COALESCE($3, room_type),
                nightly_rate = COALESCE($4, nightly_rate),
                status_id = COALESCE($5, status_id),
                view = COALESCE($6, view),
                square_meters = COALESCE($7, square_meters)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.room_number)
            .bind(&input.room_type)
            .bind(input.nightly_rate)
            .bind(input.status_id)
            .bind(&input.view)
            .bind(input.square_meters)
            .fetch_optional(pool)
            .await
    }

    /// Set the housekeeping status. Returns `None` if the room does not exist.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status_id: StatusId,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("UPDATE rooms SET status_id = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(status_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any pending or active reservation still references the room.
    pub async fn has_blocking_reservations(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM reservations WHERE room_id = $1 AND status_id = ANY($2)
             )",
        )
        .bind(id)
        .bind(blocking_reservation_status_ids())
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Hard-delete a room. Returns `true` if a row was removed.
    ///
    /// Rooms with any reservation history are protected by `ON DELETE RESTRICT`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
