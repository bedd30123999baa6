//! Repository for the `customer_reviews` table.

use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, CustomerReview};

const COLUMNS: &str = "id, reservation_id, rating, comment, reviewed_at";

pub struct ReviewRepo;

impl ReviewRepo {
    pub async fn create(
        pool: &PgPool,
        reservation_id: DbId,
        input: &CreateReview,
    ) -> Result<CustomerReview, sqlx::Error> {
        let query = format!(
            "INSERT INTO customer_reviews (reservation_id, rating, comment)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerReview>(&query)
            .bind(reservation_id)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// Reviews left on any of the customer's reservations, newest first.
    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<CustomerReview>, sqlx::Error> {
        sqlx::query_as::<_, CustomerReview>(
            "SELECT cr.id, cr.reservation_id, cr.rating, cr.comment, cr.reviewed_at
             FROM customer_reviews cr
             JOIN reservations r ON r.id = cr.reservation_id
             WHERE r.customer_id = $1
             ORDER BY cr.reviewed_at DESC, cr.id DESC",
        )
        .bind(customer_id)
        .fetch_all(pool)
        .await
    }
}
