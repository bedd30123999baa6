//! Handlers for the `/stock` resource (warehouse stock).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hotel_core::error::CoreError;
use hotel_core::inventory::{apply_adjustment, validate_adjustment_amount, StockAdjustment};
use hotel_core::types::DbId;
use hotel_db::models::stock_item::{
    CreateStockItem, StockAdjustmentRequest, StockItem, UpdateStockItem,
};
use hotel_db::repositories::{ExtraServiceRepo, StockItemRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::permission::{perm, Authorized};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/stock
pub async fn create_stock_item(
    State(state): State<AppState>,
    _auth: Authorized<perm::StockWrite>,
    Json(input): Json<CreateStockItem>,
) -> AppResult<(StatusCode, Json<DataResponse<StockItem>>)> {
    input.validate()?;
    ensure_service_exists(&state, input.service_id).await?;

    let item = StockItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(item))))
}

/// GET /api/v1/stock
pub async fn list_stock_items(
    State(state): State<AppState>,
    _auth: Authorized<perm::StockRead>,
) -> AppResult<Json<DataResponse<Vec<StockItem>>>> {
    let items = StockItemRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(items)))
}

/// GET /api/v1/stock/{id}
pub async fn get_stock_item(
    State(state): State<AppState>,
    _auth: Authorized<perm::StockRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StockItem>>> {
    Ok(Json(DataResponse::new(find_item(&state, id).await?)))
}

/// PUT /api/v1/stock/{id}
pub async fn update_stock_item(
    State(state): State<AppState>,
    _auth: Authorized<perm::StockWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStockItem>,
) -> AppResult<Json<DataResponse<StockItem>>> {
    input.validate()?;
    ensure_service_exists(&state, input.service_id).await?;

    let item = StockItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StockItem",
            id,
        }))?;
    Ok(Json(DataResponse::new(item)))
}

/// DELETE /api/v1/stock/{id}
pub async fn delete_stock_item(
    State(state): State<AppState>,
    _auth: Authorized<perm::StockDelete>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if StockItemRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "StockItem",
            id,
        }))
    }
}

/// POST /api/v1/stock/{id}/increase
pub async fn increase_stock(
    State(state): State<AppState>,
    auth: Authorized<perm::StockAmountUpdate>,
    Path(id): Path<DbId>,
    Json(input): Json<StockAdjustmentRequest>,
) -> AppResult<Json<DataResponse<StockItem>>> {
    let item = adjust(&state, id, StockAdjustment::Increase, input.amount).await?;
    tracing::info!(
        stock_item_id = id,
        amount = input.amount,
        quantity = item.quantity,
        staff_id = auth.user.staff_id,
        "Stock increased",
    );
    Ok(Json(DataResponse::new(item)))
}

/// POST /api/v1/stock/{id}/decrease
///
/// Rejected with 400 when the stock on hand is smaller than `amount`.
pub async fn decrease_stock(
    State(state): State<AppState>,
    auth: Authorized<perm::StockAmountUpdate>,
    Path(id): Path<DbId>,
    Json(input): Json<StockAdjustmentRequest>,
) -> AppResult<Json<DataResponse<StockItem>>> {
    let item = adjust(&state, id, StockAdjustment::Decrease, input.amount).await?;
    tracing::info!(
        stock_item_id = id,
        amount = input.amount,
        quantity = item.quantity,
        staff_id = auth.user.staff_id,
        "Stock decreased",
    );
    Ok(Json(DataResponse::new(item)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Apply the adjustment in one guarded UPDATE. When the row is not updated,
/// re-read it to tell a missing item from insufficient stock or overflow.
async fn adjust(
    state: &AppState,
    id: DbId,
    adjustment: StockAdjustment,
    amount: i32,
) -> AppResult<StockItem> {
    validate_adjustment_amount(amount)?;
    let delta = match adjustment {
        StockAdjustment::Increase => amount,
        StockAdjustment::Decrease => -amount,
    };

    let updated = match StockItemRepo::adjust_quantity(&state.pool, id, delta).await {
        Ok(updated) => updated,
        // numeric_value_out_of_range: the new quantity does not fit in INTEGER.
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("22003") => None,
        Err(e) => return Err(e.into()),
    };
    if let Some(item) = updated {
        return Ok(item);
    }

    let current = find_item(state, id).await?;
    apply_adjustment(current.quantity, adjustment, amount)?;
    Err(AppError::Core(CoreError::Conflict(format!(
        "Stock level of item {id} changed during the update; retry"
    ))))
}

async fn find_item(state: &AppState, id: DbId) -> AppResult<StockItem> {
    StockItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StockItem",
            id,
        }))
}

async fn ensure_service_exists(state: &AppState, service_id: Option<DbId>) -> AppResult<()> {
    let Some(service_id) = service_id else {
        return Ok(());
    };
    if ExtraServiceRepo::find_by_id(&state.pool, service_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Extra service {service_id} does not exist"
        ))));
    }
    Ok(())
}
