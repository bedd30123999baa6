//! Repository for the `stock_items` table.

use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::stock_item::{CreateStockItem, StockItem, UpdateStockItem};

const COLUMNS: &str = "id, service_id, name, quantity, created_at, updated_at";

pub struct StockItemRepo;

impl StockItemRepo {
    pub async fn create(pool: &PgPool, input: &CreateStockItem) -> Result<StockItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO stock_items (service_id, name, quantity)
             VALUES ($1, $2, COALESCE($3, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StockItem>(&query)
            .bind(input.service_id)
            .bind(&input.name)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StockItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stock_items WHERE id = $1");
        sqlx::query_as::<_, StockItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<StockItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stock_items ORDER BY name, id");
        sqlx::query_as::<_, StockItem>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStockItem,
    ) -> Result<Option<StockItem>, sqlx::Error> {
        let query = format!(
            "UPDATE stock_items SET
                service_id = COALESCE($2, service_id),
                name = COALESCE($3, name),
                quantity = COALESCE($4, quantity)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StockItem>(&query)
            .bind(id)
            .bind(input.service_id)
            .bind(&input.name)
            .bind(input.quantity)
            .fetch_optional(pool)
            .await
    }

    /// Add `delta` (positive or negative) to the quantity in one statement.
    ///
    /// Returns `None` when the item does not exist or the result would be
    /// negative; the row is left untouched in both cases.
    pub async fn adjust_quantity(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<StockItem>, sqlx::Error> {
        let query = format!(
            "UPDATE stock_items SET quantity = quantity + $2
             WHERE id = $1 AND quantity + $2 >= 0
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StockItem>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stock_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
