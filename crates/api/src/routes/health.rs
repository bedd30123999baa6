//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Size of the loaded permission table; zero means every request is denied.
    pub permission_keys: usize,
}

/// GET /health
///
/// 200 when the database answers, 503 otherwise. The body is the same either way.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = hotel_db::health_check(&state.pool).await.is_ok();
    let permission_keys = state.access.permissions.len();

    let (code, status) = if db_healthy && permission_keys > 0 {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!(db_healthy, permission_keys, "Health check degraded");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            permission_keys,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
