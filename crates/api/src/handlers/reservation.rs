//! Handlers for the `/reservations` resource.
//!
//! Writes go through [`ReservationRepo::book`], [`ReservationRepo::update`],
//! and [`ReservationRepo::delete_with_audit`], each of which is a single
//! transaction covering the reservation row, the room status, and (for
//! deletes) the audit record.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hotel_core::billing::{line_total, outstanding_balance, round_to};
use hotel_core::error::CoreError;
use hotel_core::status::ReservationStatus;
use hotel_core::stay::StayInterval;
use hotel_core::types::DbId;
use hotel_core::validation::{validate_guest_counts, validate_rating};
use hotel_db::models::charge::{CreateCharge, CreateChargeRequest, CustomerCharge};
use hotel_db::models::payment::Payment;
use hotel_db::models::reservation::{
    CreateReservation, DeletedReservation, NewBooking, Reservation, ReservationDetail,
    ReservationListParams, UpdateReservation,
};
use hotel_db::models::review::{CreateReview, CustomerReview};
use hotel_db::repositories::{
    ChargeRepo, ExtraServiceRepo, PaymentRepo, ReservationRepo, ReviewRepo,
    DEFAULT_DELETE_REASON,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::permission::{perm, Authorized};
use crate::query::{ApiQuery, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Guests assumed when the request omits counts.
const DEFAULT_ADULTS: i32 = 1;
const DEFAULT_CHILDREN: i32 = 0;

/// Optional body for `DELETE /reservations/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteReservationRequest {
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReservationPayments {
    pub payments: Vec<Payment>,
    pub total_charge: f64,
    pub total_paid: f64,
    pub outstanding: f64,
}

/// POST /api/v1/reservations
///
/// Books a room. Status defaults to active; only pending or active may be
/// requested on creation.
pub async fn create_reservation(
    State(state): State<AppState>,
    auth: Authorized<perm::ReservationsWrite>,
    Json(input): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<DataResponse<Reservation>>)> {
    let interval = StayInterval::new(input.check_in, input.check_out)?;

    let adults = input.adults.unwrap_or(DEFAULT_ADULTS);
    let children = input.children.unwrap_or(DEFAULT_CHILDREN);
    validate_guest_counts(adults, children)?;

    let status = match input.status_id {
        None => ReservationStatus::Active,
        Some(id) => ReservationStatus::from_id(id)
            .filter(|s| s.blocks_availability())
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "A new reservation must be pending or active, got status_id {id}"
                ))
            })?,
    };

    let booking = NewBooking {
        customer_id: input.customer_id,
        room_id: input.room_id,
        interval,
        adults,
        children,
        status,
    };

    let reservation = ReservationRepo::book(&state.pool, &booking).await?;
    tracing::info!(
        reservation_id = reservation.id,
        room_id = reservation.room_id,
        stay = %interval,
        staff_id = auth.user.staff_id,
        "Reservation booked",
    );
    Ok((StatusCode::CREATED, Json(DataResponse::new(reservation))))
}

/// GET /api/v1/reservations?status_id=&room_id=&customer_id=&limit=&offset=
pub async fn list_reservations(
    State(state): State<AppState>,
    _auth: Authorized<perm::ReservationsRead>,
    ApiQuery(params): ApiQuery<ReservationListParams>,
) -> AppResult<Json<DataResponse<Vec<ReservationDetail>>>> {
    let reservations = ReservationRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse::new(reservations)))
}

/// GET /api/v1/reservations/{id}
pub async fn get_reservation(
    State(state): State<AppState>,
    _auth: Authorized<perm::ReservationsRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Reservation>>> {
    let reservation = find_reservation(&state, id).await?;
    Ok(Json(DataResponse::new(reservation)))
}

/// PUT /api/v1/reservations/{id}
///
/// Any subset of customer, room, dates, guest counts, and status. The stay is
/// re-checked against every other blocking reservation and repriced.
pub async fn update_reservation(
    State(state): State<AppState>,
    auth: Authorized<perm::ReservationsWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReservation>,
) -> AppResult<Json<DataResponse<Reservation>>> {
    let reservation = ReservationRepo::update(&state.pool, id, &input).await?;
    tracing::info!(
        reservation_id = id,
        status_id = reservation.status_id,
        staff_id = auth.user.staff_id,
        "Reservation updated",
    );
    Ok(Json(DataResponse::new(reservation)))
}

/// DELETE /api/v1/reservations/{id}
///
/// Writes the audit record, deletes the reservation, and frees the room, all
/// or nothing. Returns the audit record.
pub async fn delete_reservation(
    State(state): State<AppState>,
    auth: Authorized<perm::ReservationsDelete>,
    Path(id): Path<DbId>,
    body: Option<Json<DeleteReservationRequest>>,
) -> AppResult<Json<DataResponse<DeletedReservation>>> {
    let reason = body
        .and_then(|Json(b)| b.reason)
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DELETE_REASON.to_string());

    let record =
        ReservationRepo::delete_with_audit(&state.pool, id, Some(auth.user.staff_id), &reason)
            .await?;
    tracing::info!(
        reservation_id = id,
        deleted_by = auth.user.staff_id,
        reason = %record.reason,
        "Reservation deleted",
    );
    Ok(Json(DataResponse::new(record)))
}

/// GET /api/v1/reservations/deleted?limit=&offset=
pub async fn list_deleted_reservations(
    State(state): State<AppState>,
    _auth: Authorized<perm::DeletedReservationsRead>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<DeletedReservation>>>> {
    let records = ReservationRepo::list_deleted(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse::new(records)))
}

/// GET /api/v1/reservations/{id}/payments
pub async fn list_reservation_payments(
    State(state): State<AppState>,
    _auth: Authorized<perm::PaymentsRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ReservationPayments>>> {
    let reservation = find_reservation(&state, id).await?;
    let payments = PaymentRepo::list_for_reservation(&state.pool, id).await?;
    let total_paid = round_to(payments.iter().map(|p| p.amount).sum(), 2);

    Ok(Json(DataResponse::new(ReservationPayments {
        payments,
        total_charge: reservation.total_charge,
        total_paid,
        outstanding: round_to(outstanding_balance(reservation.total_charge, total_paid), 2),
    })))
}

/// POST /api/v1/reservations/{id}/charges
///
/// Bill an active extra service to the stay at its current unit price.
pub async fn add_charge(
    State(state): State<AppState>,
    _auth: Authorized<perm::ChargesWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateChargeRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CustomerCharge>>)> {
    if input.quantity <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "quantity must be at least 1".into(),
        )));
    }
    find_reservation(&state, id).await?;

    let service = ExtraServiceRepo::find_by_id(&state.pool, input.service_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ExtraService",
            id: input.service_id,
        }))?;
    if !service.is_active {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Service '{}' is not active",
            service.name
        ))));
    }

    let charge = ChargeRepo::create(
        &state.pool,
        &CreateCharge {
            reservation_id: id,
            service_id: service.id,
            quantity: input.quantity,
            total_price: line_total(service.unit_price, input.quantity),
        },
    )
    .await?;
    tracing::info!(reservation_id = id, service_id = service.id, "Charge added");
    Ok((StatusCode::CREATED, Json(DataResponse::new(charge))))
}

/// POST /api/v1/reservations/{id}/review
pub async fn add_review(
    State(state): State<AppState>,
    _auth: Authorized<perm::ReviewsWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<DataResponse<CustomerReview>>)> {
    validate_rating(input.rating)?;
    find_reservation(&state, id).await?;

    let review = ReviewRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(review))))
}

async fn find_reservation(state: &AppState, id: DbId) -> AppResult<Reservation> {
    ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))
}
