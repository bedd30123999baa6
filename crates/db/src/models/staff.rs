//! Staff account model and DTOs.

use hotel_core::roles::Role;
use hotel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `staff` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`StaffResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Staff {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    /// Free-text title, e.g. `"Resepsiyonist"`. Reduced to a [`Role`] at login.
    pub job_title: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe staff representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct StaffResponse {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
    pub job_title: String,
    pub role: Role,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl StaffResponse {
    pub fn from_staff(staff: Staff, role: Role) -> Self {
        Self {
            id: staff.id,
            username: staff.username,
            full_name: staff.full_name,
            job_title: staff.job_title,
            role,
            is_active: staff.is_active,
            last_login_at: staff.last_login_at,
            created_at: staff.created_at,
        }
    }
}

/// DTO for inserting a staff account. The password is already hashed.
#[derive(Debug)]
pub struct CreateStaff {
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub job_title: String,
}

/// DTO for updating a staff account. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateStaff {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub is_active: Option<bool>,
}
