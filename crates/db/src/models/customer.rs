//! Customer entity model and DTOs.

use hotel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub national_id: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub gender: String,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// DTO for creating a new customer.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomer {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "national_id must not be empty"))]
    pub national_id: Option<String>,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    /// One of `male`, `female`, `unspecified`. Defaults to `unspecified`.
    pub gender: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating a customer. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomer {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, message = "national_id must not be empty"))]
    pub national_id: Option<String>,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}
