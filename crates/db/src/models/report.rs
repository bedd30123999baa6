//! Read-only aggregate rows for reports and the dashboard.

use hotel_core::status::StatusId;
use hotel_core::types::{DbId, StayDate};
use serde::Serialize;
use sqlx::FromRow;

/// Revenue collected in one calendar month.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonthlyRevenue {
    /// `YYYY-MM`.
    pub month: String,
    pub payment_count: i64,
    pub revenue: f64,
}

/// Raw counters behind `GET /dashboard/stats`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardCounts {
    pub total_reservations: i64,
    pub total_rooms: i64,
    pub occupied_rooms: i64,
    pub available_rooms: i64,
    pub todays_check_ins: i64,
    pub total_customers: i64,
}

/// A check-in or check-out happening on a given day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StayEvent {
    pub reservation_id: DbId,
    pub customer_name: String,
    pub room_number: String,
    /// `check_in` or `check_out`.
    pub event: String,
    pub date: StayDate,
    pub status_id: StatusId,
}
