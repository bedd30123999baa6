//! Repository for the `payments` table.

use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment::{CreatePayment, Payment, UpdatePayment};

/// Payment columns plus the customer resolved through the reservation.
/// Expects aliases `p` (payments) and `r` (reservations).
const COLUMNS: &str = "p.id, p.reservation_id, r.customer_id, p.amount, p.method_id, \
                        p.paid_at, p.created_at, p.updated_at";

const FROM: &str = "payments p JOIN reservations r ON r.id = p.reservation_id";

/// Provides CRUD operations and totals for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Record a payment. `paid_at` defaults to now.
    pub async fn create(pool: &PgPool, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                INSERT INTO payments (reservation_id, amount, method_id, paid_at)
                VALUES ($1, $2, $3, COALESCE($4, NOW()))
                RETURNING *
             )
             SELECT {COLUMNS} FROM p JOIN reservations r ON r.id = p.reservation_id"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.reservation_id)
            .bind(input.amount)
            .bind(input.method_id)
            .bind(input.paid_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE p.id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All payments, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} ORDER BY p.paid_at DESC, p.id DESC");
        sqlx::query_as::<_, Payment>(&query).fetch_all(pool).await
    }

    pub async fn list_for_reservation(
        pool: &PgPool,
        reservation_id: DbId,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM} WHERE p.reservation_id = $1 ORDER BY p.paid_at, p.id"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(reservation_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM} WHERE r.customer_id = $1 ORDER BY p.paid_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// Update a payment. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePayment,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                UPDATE payments SET
                    amount = COALESCE($2, amount),
                    method_id = COALESCE($3, method_id),
                    paid_at = COALESCE($4, paid_at)
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM p JOIN reservations r ON r.id = p.reservation_id"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .bind(input.amount)
            .bind(input.method_id)
            .bind(input.paid_at)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
