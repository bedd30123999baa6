use std::sync::Arc;

use hotel_core::permissions::AccessPolicy;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted internally and the rest sits
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hotel_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Job-title map and permission table, fixed for the life of the process.
    pub access: Arc<AccessPolicy>,
}
