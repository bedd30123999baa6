//! Handlers for the `/dashboard` resource.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use hotel_core::billing::occupancy_rate;
use hotel_db::models::report::StayEvent;
use hotel_db::models::reservation::ReservationDetail;
use hotel_db::repositories::{ReportRepo, ReservationRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::permission::{perm, Authorized};
use crate::response::DataResponse;
use crate::state::AppState;

/// Blocking reservations shown on the dashboard.
const ACTIVE_RESERVATIONS_LIMIT: i64 = 10;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_reservations: i64,
    pub total_rooms: i64,
    pub occupied_rooms: i64,
    pub available_rooms: i64,
    /// Percentage of rooms currently occupied, one decimal place.
    pub occupancy_rate: f64,
    pub todays_check_ins: i64,
    pub total_customers: i64,
}

/// GET /api/v1/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    _auth: Authorized<perm::DashboardRead>,
) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let today = Utc::now().date_naive();
    let counts = ReportRepo::dashboard_counts(&state.pool, today).await?;

    Ok(Json(DataResponse::new(DashboardStats {
        occupancy_rate: occupancy_rate(counts.occupied_rooms, counts.total_rooms),
        total_reservations: counts.total_reservations,
        total_rooms: counts.total_rooms,
        occupied_rooms: counts.occupied_rooms,
        available_rooms: counts.available_rooms,
        todays_check_ins: counts.todays_check_ins,
        total_customers: counts.total_customers,
    })))
}

/// GET /api/v1/dashboard/active-reservations
///
/// The pending and active reservations with the soonest check-in.
pub async fn active_reservations(
    State(state): State<AppState>,
    _auth: Authorized<perm::DashboardRead>,
) -> AppResult<Json<DataResponse<Vec<ReservationDetail>>>> {
    let rows = ReservationRepo::list_blocking(&state.pool, ACTIVE_RESERVATIONS_LIMIT).await?;
    Ok(Json(DataResponse::new(rows)))
}

/// GET /api/v1/dashboard/todays-events
pub async fn todays_events(
    State(state): State<AppState>,
    _auth: Authorized<perm::DashboardRead>,
) -> AppResult<Json<DataResponse<Vec<StayEvent>>>> {
    let today = Utc::now().date_naive();
    let events = ReportRepo::stay_events_on(&state.pool, today).await?;
    Ok(Json(DataResponse::new(events)))
}
