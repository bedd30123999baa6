//! Handlers for the `/auth` resource (login, refresh, logout, me).

use std::collections::BTreeSet;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use hotel_core::error::CoreError;
use hotel_core::roles::Role;
use hotel_core::types::DbId;
use hotel_db::models::session::CreateSession;
use hotel_db::models::staff::Staff;
use hotel_db::repositories::{SessionRepo, StaffRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Consecutive failed logins before the account is locked.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Minutes an account stays locked after too many failures.
const LOCK_DURATION_MINS: i64 = 15;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public staff info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
    pub job_title: String,
    pub role: Role,
}

/// Response body for `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: DbId,
    pub username: String,
    pub role: Role,
    pub permissions: BTreeSet<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. The canonical role is derived from
/// the stored job title here and nowhere else.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let staff = StaffRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !staff.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    if let Some(locked_until) = staff.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    let password_valid = verify_password(&input.password, &staff.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        let failures = StaffRepo::increment_failed_login(&state.pool, staff.id).await?;
        tracing::warn!(staff_id = staff.id, failures, "Failed login attempt");

        if failures >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            StaffRepo::lock_account(&state.pool, staff.id, lock_until).await?;
            tracing::warn!(staff_id = staff.id, %lock_until, "Account locked");
        }

        return Err(invalid_credentials());
    }

    StaffRepo::record_successful_login(&state.pool, staff.id).await?;

    let role = resolve_role(&state, &staff);
    tracing::info!(staff_id = staff.id, %role, "Staff logged in");

    Ok(Json(create_auth_response(&state, &staff, role).await?))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The old
/// session is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let staff = StaffRepo::find_by_id(&state.pool, session.staff_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
        })?;

    if !staff.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // Re-derived so a job title change takes effect on the next refresh.
    let role = resolve_role(&state, &staff);

    Ok(Json(create_auth_response(&state, &staff, role).await?))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the caller. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_staff(&state.pool, auth_user.staff_id).await?;
    tracing::info!(staff_id = auth_user.staff_id, revoked, "Staff logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
///
/// The caller's identity and every permission key their role holds.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<MeResponse>>> {
    let permissions = state
        .access
        .user_permissions(auth_user.role)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Json(DataResponse::new(MeResponse {
        id: auth_user.staff_id,
        username: auth_user.username,
        role: auth_user.role,
        permissions,
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// Canonical role for a staff member; unmapped titles fall back and are logged.
pub(crate) fn resolve_role(state: &AppState, staff: &Staff) -> Role {
    if !state.access.roles.is_mapped(&staff.job_title) {
        tracing::warn!(
            staff_id = staff.id,
            job_title = %staff.job_title,
            "Unmapped job title, falling back to default role",
        );
    }
    state.access.normalize_role(&staff.job_title)
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    staff: &Staff,
    role: Role,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(staff.id, &staff.username, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session_input = CreateSession {
        staff_id: staff.id,
        refresh_token_hash: refresh_hash,
        expires_at,
        user_agent: None,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: staff.id,
            username: staff.username.clone(),
            full_name: staff.full_name.clone(),
            job_title: staff.job_title.clone(),
            role,
        },
    })
}
