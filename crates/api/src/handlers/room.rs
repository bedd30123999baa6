//! Handlers for the `/rooms` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hotel_core::billing::compute_total_charge;
use hotel_core::error::CoreError;
use hotel_core::status::RoomStatus;
use hotel_core::stay::StayInterval;
use hotel_core::types::{DbId, StayDate};
use hotel_core::validation::validate_room_type;
use hotel_db::models::room::{CreateRoom, Room, UpdateRoom, UpdateRoomStatus};
use hotel_db::repositories::{ReservationRepo, RoomRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::permission::{perm, Authorized};
use crate::query::ApiQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /rooms/{id}/availability`.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub check_in: StayDate,
    pub check_out: StayDate,
    /// Reservation to ignore, so an existing booking can be re-checked against itself.
    pub exclude_reservation_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub room_id: DbId,
    pub available: bool,
    pub nights: i64,
    pub total_charge: f64,
}

/// POST /api/v1/rooms
pub async fn create_room(
    State(state): State<AppState>,
    _auth: Authorized<perm::RoomsWrite>,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<DataResponse<Room>>)> {
    input.validate()?;
    validate_room_type(&input.room_type)?;
    if let Some(status_id) = input.status_id {
        parse_room_status(status_id)?;
    }

    let room = RoomRepo::create(&state.pool, &input).await?;
    tracing::info!(room_id = room.id, room_number = %room.room_number, "Room created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(room))))
}

/// GET /api/v1/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    _auth: Authorized<perm::RoomsRead>,
) -> AppResult<Json<DataResponse<Vec<Room>>>> {
    let rooms = RoomRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(rooms)))
}

/// GET /api/v1/rooms/available
///
/// Rooms whose housekeeping status is `available`.
pub async fn list_available_rooms(
    State(state): State<AppState>,
    _auth: Authorized<perm::RoomsRead>,
) -> AppResult<Json<DataResponse<Vec<Room>>>> {
    let rooms = RoomRepo::list_by_status(&state.pool, RoomStatus::Available).await?;
    Ok(Json(DataResponse::new(rooms)))
}

/// GET /api/v1/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    _auth: Authorized<perm::RoomsRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Room>>> {
    let room = find_room(&state, id).await?;
    Ok(Json(DataResponse::new(room)))
}

/// PUT /api/v1/rooms/{id}
pub async fn update_room(
    State(state): State<AppState>,
    _auth: Authorized<perm::RoomsWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<Json<DataResponse<Room>>> {
    input.validate()?;
    if let Some(room_type) = &input.room_type {
        validate_room_type(room_type)?;
    }
    if let Some(status_id) = input.status_id {
        parse_room_status(status_id)?;
    }

    let room = RoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    Ok(Json(DataResponse::new(room)))
}

/// PUT /api/v1/rooms/{id}/status
pub async fn update_room_status(
    State(state): State<AppState>,
    _auth: Authorized<perm::RoomsWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoomStatus>,
) -> AppResult<Json<DataResponse<Room>>> {
    let status = parse_room_status(input.status_id)?;

    let room = RoomRepo::set_status(&state.pool, id, status.id())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    tracing::info!(room_id = id, %status, "Room status changed");
    Ok(Json(DataResponse::new(room)))
}

/// DELETE /api/v1/rooms/{id}
///
/// Refused with 409 while a pending or active reservation holds the room.
pub async fn delete_room(
    State(state): State<AppState>,
    _auth: Authorized<perm::RoomsDelete>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if RoomRepo::has_blocking_reservations(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Room {id} has pending or active reservations"
        ))));
    }

    if RoomRepo::delete(&state.pool, id).await? {
        tracing::info!(room_id = id, "Room deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Room", id }))
    }
}

/// GET /api/v1/rooms/{id}/availability?check_in=&check_out=&exclude_reservation_id=
///
/// Date-overlap check plus the price the stay would cost. Housekeeping status
/// is not consulted; booking applies that gate separately.
pub async fn check_availability(
    State(state): State<AppState>,
    _auth: Authorized<perm::ReservationsRead>,
    Path(id): Path<DbId>,
    ApiQuery(params): ApiQuery<AvailabilityParams>,
) -> AppResult<Json<DataResponse<AvailabilityResponse>>> {
    let interval = StayInterval::new(params.check_in, params.check_out)?;
    let room = find_room(&state, id).await?;

    let available = ReservationRepo::is_available(
        &state.pool,
        room.id,
        &interval,
        params.exclude_reservation_id,
    )
    .await?;

    Ok(Json(DataResponse::new(AvailabilityResponse {
        room_id: room.id,
        available,
        nights: interval.nights(),
        total_charge: compute_total_charge(room.nightly_rate, params.check_in, params.check_out),
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_room(state: &AppState, id: DbId) -> AppResult<Room> {
    RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))
}

fn parse_room_status(status_id: i16) -> AppResult<RoomStatus> {
    RoomStatus::from_id(status_id).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown room status id {status_id}"
        )))
    })
}
