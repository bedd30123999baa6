//! Handlers for the `/services` resource (billable extra services).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hotel_core::error::CoreError;
use hotel_core::types::DbId;
use hotel_db::models::extra_service::{
    CreateExtraService, ExtraService, UpdateExtraService, UpdateServiceStatus,
};
use hotel_db::repositories::ExtraServiceRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::permission::{perm, Authorized};
use crate::query::{ApiQuery, IncludeInactiveParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/services
pub async fn create_service(
    State(state): State<AppState>,
    _auth: Authorized<perm::ServicesWrite>,
    Json(input): Json<CreateExtraService>,
) -> AppResult<(StatusCode, Json<DataResponse<ExtraService>>)> {
    input.validate()?;
    let service = ExtraServiceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(service))))
}

/// GET /api/v1/services?include_inactive=
pub async fn list_services(
    State(state): State<AppState>,
    _auth: Authorized<perm::ServicesRead>,
    ApiQuery(params): ApiQuery<IncludeInactiveParams>,
) -> AppResult<Json<DataResponse<Vec<ExtraService>>>> {
    let services = ExtraServiceRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(DataResponse::new(services)))
}

/// GET /api/v1/services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    _auth: Authorized<perm::ServicesRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ExtraService>>> {
    let service = ExtraServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(DataResponse::new(service)))
}

/// PUT /api/v1/services/{id}
pub async fn update_service(
    State(state): State<AppState>,
    _auth: Authorized<perm::ServicesWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExtraService>,
) -> AppResult<Json<DataResponse<ExtraService>>> {
    input.validate()?;
    let service = ExtraServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(DataResponse::new(service)))
}

/// PUT /api/v1/services/{id}/status
///
/// Operations staff may switch a service on or off without other write access.
pub async fn update_service_status(
    State(state): State<AppState>,
    auth: Authorized<perm::ServicesStatusUpdate>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateServiceStatus>,
) -> AppResult<Json<DataResponse<ExtraService>>> {
    let service = ExtraServiceRepo::set_active(&state.pool, id, input.is_active)
        .await?
        .ok_or(not_found(id))?;
    tracing::info!(
        service_id = id,
        is_active = input.is_active,
        staff_id = auth.user.staff_id,
        "Service status changed",
    );
    Ok(Json(DataResponse::new(service)))
}

/// DELETE /api/v1/services/{id}
///
/// Refused with 409 once the service has been billed; deactivate it instead.
pub async fn delete_service(
    State(state): State<AppState>,
    _auth: Authorized<perm::ServicesDelete>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ExtraServiceRepo::is_charged(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Service {id} has been charged to guests; deactivate it instead"
        ))));
    }

    if ExtraServiceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ExtraService",
        id,
    })
}
