//! Repository for the `staff_sessions` table.

use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{CreateSession, StaffSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, staff_id, refresh_token_hash, expires_at, is_revoked, \
                        user_agent, created_at, updated_at";

/// Refresh-token sessions for staff accounts.
pub struct SessionRepo;

impl SessionRepo {
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<StaffSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff_sessions (staff_id, refresh_token_hash, expires_at, user_agent)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffSession>(&query)
            .bind(input.staff_id)
            .bind(&input.refresh_token_hash)
            .bind(input.expires_at)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// Find a live session by its refresh token hash.
    ///
    /// Revoked and expired sessions are never returned.
    pub async fn find_by_refresh_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<StaffSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff_sessions
             WHERE refresh_token_hash = $1
               AND is_revoked = false
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, StaffSession>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a single session. Returns `true` if it was still live.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE staff_sessions SET is_revoked = true WHERE id = $1 AND is_revoked = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke every live session of one staff member. Returns the count revoked.
    pub async fn revoke_all_for_staff(pool: &PgPool, staff_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE staff_sessions SET is_revoked = true
             WHERE staff_id = $1 AND is_revoked = false",
        )
        .bind(staff_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
