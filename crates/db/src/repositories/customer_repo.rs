//! Repository for the `customers` table.

use hotel_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use hotel_core::status::blocking_reservation_status_ids;
use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, national_id, phone, email, gender, \
                        address, notes, created_at, updated_at";

/// Gender stored when the caller does not supply one.
const DEFAULT_GENDER: &str = "unspecified";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers
                (first_name, last_name, national_id, phone, email, gender, address, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.national_id)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.gender.as_deref().unwrap_or(DEFAULT_GENDER))
            .bind(&input.address)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List customers, newest first. `search` matches name, phone, or email
    /// case-insensitively.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM customers
             WHERE $1::TEXT IS NULL
                OR first_name ILIKE '%' || $1 || '%'
                OR last_name ILIKE '%' || $1 || '%'
                OR phone ILIKE '%' || $1 || '%'
                OR email ILIKE '%' || $1 || '%'
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(search)
            .bind(clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Update a customer. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                national_id = COALESCE($4, national_id),
                phone = COALESCE($5, phone),
                email = COALESCE($6, email),
                gender = COALESCE($7, gender),
                address = COALESCE($8, address),
                notes = COALESCE($9, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.national_id)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.gender)
            .bind(&input.address)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Whether the customer holds any pending or active reservation.
    pub async fn has_blocking_reservations(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM reservations WHERE customer_id = $1 AND status_id = ANY($2)
             )",
        )
        .bind(id)
        .bind(blocking_reservation_status_ids())
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Hard-delete a customer. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
