//! Read-only aggregates for the reports and dashboard endpoints.

use hotel_core::status::{blocking_reservation_status_ids, RoomStatus};
use hotel_core::types::StayDate;
use sqlx::PgPool;

use crate::models::report::{DashboardCounts, MonthlyRevenue, StayEvent};
use crate::models::reservation::ReservationDetail;

pub struct ReportRepo;

impl ReportRepo {
    /// Payments grouped by calendar month (UTC), newest month first.
    pub async fn monthly_revenue(pool: &PgPool) -> Result<Vec<MonthlyRevenue>, sqlx::Error> {
        sqlx::query_as::<_, MonthlyRevenue>(
            "SELECT to_char(date_trunc('month', paid_at AT TIME ZONE 'UTC'), 'YYYY-MM') AS month,
                    COUNT(*) AS payment_count,
                    SUM(amount)::DOUBLE PRECISION AS revenue
             FROM payments
             GROUP BY 1
             ORDER BY 1 DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Reservations whose stay intersects `[from, to)`, with guest and room.
    /// Either bound may be open.
    pub async fn reservation_report(
        pool: &PgPool,
        from: Option<StayDate>,
        to: Option<StayDate>,
    ) -> Result<Vec<ReservationDetail>, sqlx::Error> {
        sqlx::query_as::<_, ReservationDetail>(
            "SELECT r.id, r.customer_id, c.first_name || ' ' || c.last_name AS customer_name,
                    r.room_id, rm.room_number, r.check_in, r.check_out, r.adults, r.children,
                    r.total_charge, r.status_id, r.created_at
             FROM reservations r
             JOIN customers c ON c.id = r.customer_id
             JOIN rooms rm ON rm.id = r.room_id
             WHERE ($1::DATE IS NULL OR r.check_out > $1)
               AND ($2::DATE IS NULL OR r.check_in < $2)
             ORDER BY r.check_in, r.id",
        )
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }

    /// Headline counters for the dashboard, in one round trip.
    pub async fn dashboard_counts(
        pool: &PgPool,
        today: StayDate,
    ) -> Result<DashboardCounts, sqlx::Error> {
        sqlx::query_as::<_, DashboardCounts>(
            "SELECT
                (SELECT COUNT(*) FROM reservations) AS total_reservations,
                (SELECT COUNT(*) FROM rooms) AS total_rooms,
                (SELECT COUNT(*) FROM rooms WHERE status_id = $1) AS occupied_rooms,
                (SELECT COUNT(*) FROM rooms WHERE status_id = $2) AS available_rooms,
                (SELECT COUNT(*) FROM reservations
                  WHERE check_in = $3 AND status_id = ANY($4)) AS todays_check_ins,
                (SELECT COUNT(*) FROM customers) AS total_customers",
        )
        .bind(RoomStatus::Occupied.id())
        .bind(RoomStatus::Available.id())
        .bind(today)
        .bind(blocking_reservation_status_ids())
        .fetch_one(pool)
        .await
    }

    /// Check-ins and check-outs of blocking reservations on `day`.
    pub async fn stay_events_on(
        pool: &PgPool,
        day: StayDate,
    ) -> Result<Vec<StayEvent>, sqlx::Error> {
        sqlx::query_as::<_, StayEvent>(
            "SELECT r.id AS reservation_id,
                    c.first_name || ' ' || c.last_name AS customer_name,
                    rm.room_number,
                    CASE WHEN r.check_in = $1 THEN 'check_in' ELSE 'check_out' END AS event,
                    $1::DATE AS date,
                    r.status_id
             FROM reservations r
             JOIN customers c ON c.id = r.customer_id
             JOIN rooms rm ON rm.id = r.room_id
             WHERE (r.check_in = $1 OR r.check_out = $1)
               AND r.status_id = ANY($2)
             ORDER BY event, rm.room_number",
        )
        .bind(day)
        .bind(blocking_reservation_status_ids())
        .fetch_all(pool)
        .await
    }
}
