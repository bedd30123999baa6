//! Field-level checks shared by the create/update handlers.
//!
//! Each function returns `CoreError::Validation` with a message naming the
//! offending field.

use crate::error::CoreError;

/// Accepted values for a customer's `gender` column.
pub const VALID_GENDERS: &[&str] = &["male", "female", "unspecified"];

/// Lowest and highest accepted review score.
pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// Room categories offered by the hotel.
pub const VALID_ROOM_TYPES: &[&str] = &["single", "double", "twin", "family", "suite", "deluxe"];

pub fn validate_gender(gender: &str) -> Result<(), CoreError> {
    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid gender '{gender}'. Must be one of: {}",
            VALID_GENDERS.join(", ")
        )))
    }
}

pub fn validate_room_type(room_type: &str) -> Result<(), CoreError> {
    if VALID_ROOM_TYPES.contains(&room_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid room type '{room_type}'. Must be one of: {}",
            VALID_ROOM_TYPES.join(", ")
        )))
    }
}

pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// At least one adult; children may be zero.
pub fn validate_guest_counts(adults: i32, children: i32) -> Result<(), CoreError> {
    if adults < 1 {
        return Err(CoreError::Validation("adults must be at least 1".into()));
    }
    if children < 0 {
        return Err(CoreError::Validation("children cannot be negative".into()));
    }
    Ok(())
}

/// Payment amounts must be strictly positive.
pub fn validate_payment_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::Validation(
            "Payment amount must be greater than zero".into(),
        ));
    }
    Ok(())
}
