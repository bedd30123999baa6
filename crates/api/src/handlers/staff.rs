//! Handlers for the `/staff` resource (staff account management).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hotel_core::error::CoreError;
use hotel_core::types::DbId;
use hotel_db::models::staff::{CreateStaff, Staff, StaffResponse, UpdateStaff};
use hotel_db::repositories::StaffRepo;
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_staff_password};
use crate::error::{AppError, AppResult};
use crate::middleware::permission::{perm, Authorized};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /staff`.
#[derive(Debug, Deserialize)]
pub struct CreateStaffRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub job_title: String,
}

/// Request body for `POST /staff/{id}/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/staff
///
/// Create a staff account. The password is hashed before it reaches the
/// repository; the response never carries the hash.
pub async fn create_staff(
    State(state): State<AppState>,
    auth: Authorized<perm::StaffWrite>,
    Json(input): Json<CreateStaffRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<StaffResponse>>)> {
    if input.username.trim().is_empty() || input.full_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "username and full_name are required".into(),
        )));
    }
    validate_staff_password(&input.password, &input.username)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let staff = StaffRepo::create(
        &state.pool,
        &CreateStaff {
            username: input.username,
            password_hash: hashed,
            full_name: input.full_name,
            job_title: input.job_title,
        },
    )
    .await?;
    tracing::info!(
        staff_id = staff.id,
        created_by = auth.user.staff_id,
        "Staff account created",
    );

    let response = to_response(&state, staff);
    Ok((StatusCode::CREATED, Json(DataResponse::new(response))))
}

/// GET /api/v1/staff
pub async fn list_staff(
    State(state): State<AppState>,
    _auth: Authorized<perm::StaffRead>,
) -> AppResult<Json<DataResponse<Vec<StaffResponse>>>> {
    let staff = StaffRepo::list(&state.pool).await?;
    let responses = staff.into_iter().map(|s| to_response(&state, s)).collect();
    Ok(Json(DataResponse::new(responses)))
}

/// GET /api/v1/staff/{id}
pub async fn get_staff(
    State(state): State<AppState>,
    _auth: Authorized<perm::StaffRead>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StaffResponse>>> {
    let staff = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;
    Ok(Json(DataResponse::new(to_response(&state, staff))))
}

/// PUT /api/v1/staff/{id}
///
/// Profile fields only; a new job title changes the role at the next login.
pub async fn update_staff(
    State(state): State<AppState>,
    _auth: Authorized<perm::StaffWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStaff>,
) -> AppResult<Json<DataResponse<StaffResponse>>> {
    let staff = StaffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;
    Ok(Json(DataResponse::new(to_response(&state, staff))))
}

/// DELETE /api/v1/staff/{id}
///
/// Deactivates the account (sets `is_active = false`). Returns 204 No Content.
pub async fn deactivate_staff(
    State(state): State<AppState>,
    auth: Authorized<perm::StaffDelete>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == auth.user.staff_id {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot deactivate your own account".into(),
        )));
    }

    if StaffRepo::deactivate(&state.pool, id).await? {
        tracing::info!(staff_id = id, deactivated_by = auth.user.staff_id, "Staff deactivated");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Staff", id }))
    }
}

/// POST /api/v1/staff/{id}/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    _auth: Authorized<perm::StaffWrite>,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    let staff = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;
    validate_staff_password(&input.new_password, &staff.username)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    if StaffRepo::update_password(&state.pool, id, &hashed).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Staff", id }))
    }
}

fn to_response(state: &AppState, staff: Staff) -> StaffResponse {
    let role = state.access.normalize_role(&staff.job_title);
    StaffResponse::from_staff(staff, role)
}
