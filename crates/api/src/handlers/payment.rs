//! Handlers for the `/payments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hotel_core::error::CoreError;
use hotel_core::status::{PaymentMethod, StatusId};
use hotel_core::types::DbId;
use hotel_core::validation::validate_payment_amount;
use hotel_db::models::payment::{CreatePayment, Payment, UpdatePayment};
use hotel_db::repositories::{PaymentRepo, ReservationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::permission::{perm, Authorized};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/payments
///
/// A payment against a reservation that does not exist is a bad request, not
/// a missing resource.
pub async fn create_payment(
    State(state): State<AppState>,
    _auth: Authorized<perm::PaymentsWrite>,
    Json(input): Json<CreatePayment>,
) -> AppResult<(StatusCode, Json<DataResponse<Payment>>)> {
    validate_payment_amount(input.amount)?;
    parse_method(input.method_id)?;

    if ReservationRepo::find_by_id(&state.pool, input.reservation_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(format!(
            "Reservation {} does not exist",
            input.reservation_id
        )));
    }

    let payment = PaymentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        payment_id = payment.id,
        reservation_id = payment.reservation_id,
        amount = payment.amount,
        "Payment recorded",
    );
    Ok((StatusCode::CREATED, Json(DataResponse::new(payment))))
}

/// GET /api/v1/payments
pub async fn list_payments(
    State(state): State<AppState>,
    _auth: Authorized<perm::PaymentsRead>,
) -> AppResult<Json<DataResponse<Vec<Payment>>>> {
    let payments = PaymentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(payments)))
}

/// GET /api/v1/payments/{id}
pub async fn get_payment(
    State(state): State<AppState>,
    _auth: Authorized<perm::PaymentsRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Payment>>> {
    let payment = PaymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))?;
    Ok(Json(DataResponse::new(payment)))
}

/// PUT /api/v1/payments/{id}
pub async fn update_payment(
    State(state): State<AppState>,
    _auth: Authorized<perm::PaymentsWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePayment>,
) -> AppResult<Json<DataResponse<Payment>>> {
    if let Some(amount) = input.amount {
        validate_payment_amount(amount)?;
    }
    if let Some(method_id) = input.method_id {
        parse_method(method_id)?;
    }

    let payment = PaymentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))?;
    Ok(Json(DataResponse::new(payment)))
}

/// DELETE /api/v1/payments/{id}
pub async fn delete_payment(
    State(state): State<AppState>,
    _auth: Authorized<perm::PaymentsDelete>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PaymentRepo::delete(&state.pool, id).await? {
        tracing::info!(payment_id = id, "Payment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))
    }
}

fn parse_method(method_id: StatusId) -> AppResult<PaymentMethod> {
    PaymentMethod::from_id(method_id).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown payment method id {method_id}"
        )))
    })
}
