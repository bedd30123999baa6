//! Handlers for the `/reports` resource.

use axum::extract::State;
use axum::Json;
use hotel_core::error::CoreError;
use hotel_db::models::report::MonthlyRevenue;
use hotel_db::models::reservation::ReservationDetail;
use hotel_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::permission::{perm, Authorized};
use crate::query::{ApiQuery, DateRangeParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reports/monthly
///
/// Payment revenue per calendar month, most recent first.
pub async fn monthly_revenue(
    State(state): State<AppState>,
    _auth: Authorized<perm::ReportsRead>,
) -> AppResult<Json<DataResponse<Vec<MonthlyRevenue>>>> {
    let rows = ReportRepo::monthly_revenue(&state.pool).await?;
    Ok(Json(DataResponse::new(rows)))
}

/// GET /api/v1/reports/reservations?from=&to=
///
/// Reservations whose stay overlaps `[from, to)`. Either bound may be omitted.
pub async fn reservation_report(
    State(state): State<AppState>,
    _auth: Authorized<perm::ReportsRead>,
    ApiQuery(range): ApiQuery<DateRangeParams>,
) -> AppResult<Json<DataResponse<Vec<ReservationDetail>>>> {
    if let (Some(from), Some(to)) = (range.from, range.to) {
        if to < from {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Report range is inverted: {from} > {to}"
            ))));
        }
    }

    let rows = ReportRepo::reservation_report(&state.pool, range.from, range.to).await?;
    Ok(Json(DataResponse::new(rows)))
}
