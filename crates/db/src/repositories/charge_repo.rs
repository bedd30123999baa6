//! Repository for the `customer_charges` table.

use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::charge::{CreateCharge, CustomerCharge};

/// Expects aliases `cc` (customer_charges) and `s` (extra_services).
const COLUMNS: &str = "cc.id, cc.reservation_id, cc.service_id, s.name AS service_name, \
                        cc.quantity, cc.total_price, cc.charged_at";

pub struct ChargeRepo;

impl ChargeRepo {
    pub async fn create(pool: &PgPool, input: &CreateCharge) -> Result<CustomerCharge, sqlx::Error> {
        let query = format!(
            "WITH cc AS (
                INSERT INTO customer_charges (reservation_id, service_id, quantity, total_price)
                VALUES ($1, $2, $3, $4)
                RETURNING *
             )
             SELECT {COLUMNS} FROM cc JOIN extra_services s ON s.id = cc.service_id"
        );
        sqlx::query_as::<_, CustomerCharge>(&query)
            .bind(input.reservation_id)
            .bind(input.service_id)
            .bind(input.quantity)
            .bind(input.total_price)
            .fetch_one(pool)
            .await
    }

    /// Every charge across the customer's reservations, newest first.
    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<CustomerCharge>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM customer_charges cc
             JOIN extra_services s ON s.id = cc.service_id
             JOIN reservations r ON r.id = cc.reservation_id
             WHERE r.customer_id = $1
             ORDER BY cc.charged_at DESC, cc.id DESC"
        );
        sqlx::query_as::<_, CustomerCharge>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }
}
