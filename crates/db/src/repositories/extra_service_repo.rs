//! Repository for the `extra_services` table.

use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::extra_service::{CreateExtraService, ExtraService, UpdateExtraService};

const COLUMNS: &str = "id, name, unit_price, category, is_active, created_at, updated_at";

pub struct ExtraServiceRepo;

impl ExtraServiceRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateExtraService,
    ) -> Result<ExtraService, sqlx::Error> {
        let query = format!(
            "INSERT INTO extra_services (name, unit_price, category)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExtraService>(&query)
            .bind(&input.name)
            .bind(input.unit_price)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ExtraService>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM extra_services WHERE id = $1");
        sqlx::query_as::<_, ExtraService>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List services by name; inactive ones only when asked.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<ExtraService>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM extra_services
             WHERE is_active = true OR $1
             ORDER BY name"
        );
        sqlx::query_as::<_, ExtraService>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExtraService,
    ) -> Result<Option<ExtraService>, sqlx::Error> {
        let query = format!(
            "UPDATE extra_services SET
                name = COALESCE($2, name),
                unit_price = COALESCE($3, unit_price),
                category = COALESCE($4, category)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExtraService>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.unit_price)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<ExtraService>, sqlx::Error> {
        let query =
            format!("UPDATE extra_services SET is_active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ExtraService>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }

    /// Whether any customer charge references the service.
    pub async fn is_charged(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM customer_charges WHERE service_id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM extra_services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
