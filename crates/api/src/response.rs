//! Shared response envelope types for API handlers.
//!
//! Every success body is `{ "data": ... }` and every error body is
//! `{ "error": ..., "code": ... }`. Use these types rather than ad-hoc `json!`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Standard `{ "error": message, "code": CODE }` error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

/// Build an error response with the standard body.
pub fn error_response(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    let body = ErrorResponse {
        error: message.into(),
        code,
    };
    (status, Json(body)).into_response()
}
