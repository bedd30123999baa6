//! Query parameter types shared by several handler modules, and the
//! [`ApiQuery`] extractor that reads them.

use axum::extract::FromRequestParts;
use serde::Deserialize;

use crate::error::AppError;

/// [`axum::extract::Query`] with its rejection mapped through [`AppError`], so
/// a malformed query string gets the standard JSON 400 body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped in the repository layer via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `?include_inactive=` for lists that hide deactivated rows by default.
#[derive(Debug, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// `?search=&limit=&offset=` for the customer list.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `?from=&to=` date range for reports.
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeParams {
    pub from: Option<hotel_core::types::StayDate>,
    pub to: Option<hotel_core::types::StayDate>,
}
