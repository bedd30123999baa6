//! Handlers for the `/customers` resource and its read-only sub-resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hotel_core::billing::{average_rating, round_to};
use hotel_core::error::CoreError;
use hotel_core::types::DbId;
use hotel_core::validation::validate_gender;
use hotel_db::models::charge::CustomerCharge;
use hotel_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use hotel_db::models::payment::Payment;
use hotel_db::models::review::CustomerReview;
use hotel_db::repositories::{ChargeRepo, CustomerRepo, PaymentRepo, ReviewRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::permission::{perm, Authorized};
use crate::query::{ApiQuery, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CustomerCharges {
    pub charges: Vec<CustomerCharge>,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct CustomerReviews {
    pub reviews: Vec<CustomerReview>,
    pub count: usize,
    /// `None` when the customer has no reviews.
    pub average_rating: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CustomerPayments {
    pub payments: Vec<Payment>,
    pub total_paid: f64,
}

/// POST /api/v1/customers
pub async fn create_customer(
    State(state): State<AppState>,
    _auth: Authorized<perm::CustomersWrite>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<DataResponse<Customer>>)> {
    input.validate()?;
    if let Some(gender) = &input.gender {
        validate_gender(gender)?;
    }

    let customer = CustomerRepo::create(&state.pool, &input).await?;
    tracing::info!(customer_id = customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(customer))))
}

/// GET /api/v1/customers?search=&limit=&offset=
///
/// `search` is a case-insensitive substring match on name, phone, and email.
pub async fn list_customers(
    State(state): State<AppState>,
    _auth: Authorized<perm::CustomersRead>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Customer>>>> {
    let customers = CustomerRepo::list(
        &state.pool,
        params.search.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(DataResponse::new(customers)))
}

/// GET /api/v1/customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    _auth: Authorized<perm::CustomersRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = find_customer(&state, id).await?;
    Ok(Json(DataResponse::new(customer)))
}

/// PUT /api/v1/customers/{id}
pub async fn update_customer(
    State(state): State<AppState>,
    _auth: Authorized<perm::CustomersWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<DataResponse<Customer>>> {
    input.validate()?;
    if let Some(gender) = &input.gender {
        validate_gender(gender)?;
    }

    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(DataResponse::new(customer)))
}

/// DELETE /api/v1/customers/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    _auth: Authorized<perm::CustomersDelete>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CustomerRepo::has_blocking_reservations(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Customer {id} has pending or active reservations"
        ))));
    }

    if CustomerRepo::delete(&state.pool, id).await? {
        tracing::info!(customer_id = id, "Customer deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))
    }
}

/// GET /api/v1/customers/{id}/charges
pub async fn list_customer_charges(
    State(state): State<AppState>,
    _auth: Authorized<perm::ChargesRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CustomerCharges>>> {
    find_customer(&state, id).await?;
    let charges = ChargeRepo::list_for_customer(&state.pool, id).await?;
    let total = round_to(charges.iter().map(|c| c.total_price).sum(), 2);
    Ok(Json(DataResponse::new(CustomerCharges { charges, total })))
}

/// GET /api/v1/customers/{id}/reviews
pub async fn list_customer_reviews(
    State(state): State<AppState>,
    _auth: Authorized<perm::ReviewsRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CustomerReviews>>> {
    find_customer(&state, id).await?;
    let reviews = ReviewRepo::list_for_customer(&state.pool, id).await?;
    let ratings: Vec<i16> = reviews.iter().map(|r| r.rating).collect();

    Ok(Json(DataResponse::new(CustomerReviews {
        count: reviews.len(),
        average_rating: average_rating(&ratings),
        reviews,
    })))
}

/// GET /api/v1/customers/{id}/payments
pub async fn list_customer_payments(
    State(state): State<AppState>,
    _auth: Authorized<perm::PaymentsRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CustomerPayments>>> {
    find_customer(&state, id).await?;
    let payments = PaymentRepo::list_for_customer(&state.pool, id).await?;
    let total_paid = round_to(payments.iter().map(|p| p.amount).sum(), 2);
    Ok(Json(DataResponse::new(CustomerPayments {
        payments,
        total_paid,
    })))
}

async fn find_customer(state: &AppState, id: DbId) -> AppResult<Customer> {
    CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))
}
