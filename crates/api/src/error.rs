use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hotel_core::error::CoreError;
use hotel_db::repositories::BookingError;

use crate::response::error_response;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`BookingError`] for the reservation
/// unit of work, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hotel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A refused reservation write.
    #[error(transparent)]
    Booking(#[from] BookingError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

/// A query string that does not deserialize (for example a malformed date)
/// is a validation failure like any other.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl AppError {
    /// HTTP status, machine-readable code, and client-facing message.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Booking(booking) => classify_booking_error(booking),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();
        error_response(status, code, message)
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn classify_core_error(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal()
        }
    }
}

/// Room-not-available and date overlap are both 409 but carry distinct codes
/// so clients can tell a housekeeping block from a double booking.
fn classify_booking_error(err: &BookingError) -> (StatusCode, &'static str, String) {
    match err {
        BookingError::RoomNotFound(_)
        | BookingError::CustomerNotFound(_)
        | BookingError::ReservationNotFound(_) => {
            (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
        }
        BookingError::RoomNotAvailable { .. } => {
            (StatusCode::CONFLICT, "ROOM_NOT_AVAILABLE", err.to_string())
        }
        BookingError::DatesOverlap { .. } => {
            (StatusCode::CONFLICT, "RESERVATION_OVERLAP", err.to_string())
        }
        BookingError::Invalid(core) => classify_core_error(core),
        BookingError::Database(db) => classify_sqlx_error(db),
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on a `uq_` constraint and foreign key violations map to 409.
/// - Check constraint violations map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                Some("23503") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Operation violates foreign key constraint: {constraint}"),
                    );
                }
                Some("23514") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        format!("Value violates check constraint: {constraint}"),
                    );
                }
                Some("22003") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        "Numeric value out of range".to_string(),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hotel_core::stay::StayInterval;

    use super::*;

    fn status_and_code(err: AppError) -> (StatusCode, String) {
        let (status, code, _) = err.classify();
        (status, code.to_string())
    }

    #[test]
    fn room_not_available_and_overlap_are_distinct_conflicts() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        let interval = StayInterval::new(d(10), d(12)).unwrap();

        let not_available = status_and_code(AppError::Booking(BookingError::RoomNotAvailable {
            room_id: 1,
            status: "maintenance".into(),
        }));
        let overlap = status_and_code(AppError::Booking(BookingError::DatesOverlap {
            room_id: 1,
            interval,
        }));

        assert_eq!(not_available, (StatusCode::CONFLICT, "ROOM_NOT_AVAILABLE".into()));
        assert_eq!(overlap, (StatusCode::CONFLICT, "RESERVATION_OVERLAP".into()));
    }

    #[test]
    fn invalid_interval_is_a_bad_request() {
        let err = AppError::Booking(BookingError::Invalid(CoreError::Validation(
            "check_out must be after check_in".into(),
        )));
        assert_eq!(
            status_and_code(err),
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR".into())
        );
    }

    #[test]
    fn missing_reservation_is_not_found() {
        let err = AppError::Booking(BookingError::ReservationNotFound(9));
        assert_eq!(status_and_code(err), (StatusCode::NOT_FOUND, "NOT_FOUND".into()));
    }

    #[test]
    fn row_not_found_is_not_found() {
        assert_eq!(
            status_and_code(AppError::Database(sqlx::Error::RowNotFound)),
            (StatusCode::NOT_FOUND, "NOT_FOUND".into())
        );
    }

    #[test]
    fn malformed_query_string_is_a_validation_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Dates {
            #[allow(dead_code)]
            check_in: NaiveDate,
        }

        let uri: axum::http::Uri = "/availability?check_in=2025-13-40".parse().unwrap();
        let rejection = axum::extract::Query::<Dates>::try_from_uri(&uri).unwrap_err();
        assert_eq!(
            status_and_code(AppError::from(rejection)),
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR".into())
        );
    }
}
