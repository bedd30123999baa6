//! Staff password hashing and the password policy for back-office accounts.
//!
//! Hashes are Argon2id PHC strings, so parameters and salt travel with the
//! hash. Front-desk terminals are shared, so the policy also rejects
//! passwords built from the account's own username.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Minimum password length for staff accounts, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// `Ok(false)` on a mismatch; `Err` only when the stored hash is unusable.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Reject passwords shorter than `min_length` characters.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}

/// Password policy for a staff account.
///
/// On top of [`MIN_PASSWORD_LENGTH`], the password must contain at least one
/// character that is not a letter and must not contain the username
/// (case-insensitive).
pub fn validate_staff_password(password: &str, username: &str) -> Result<(), String> {
    validate_password_strength(password, MIN_PASSWORD_LENGTH)?;

    if password.chars().all(char::is_alphabetic) {
        return Err("Password must contain a digit or symbol".into());
    }

    let username = username.trim().to_lowercase();
    if !username.is_empty() && password.to_lowercase().contains(&username) {
        return Err("Password must not contain the username".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("resepsiyon-2024").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("resepsiyon-2024", &hash).expect("verify should succeed"));
        assert!(!verify_password("resepsiyon-2025", &hash).expect("verify should succeed"));
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Seven characters, more than eight bytes.
        assert!(validate_password_strength("şşşşşşş", MIN_PASSWORD_LENGTH).is_err());
        assert!(validate_password_strength("şşşşşşşş", MIN_PASSWORD_LENGTH).is_ok());
    }

    #[test]
    fn test_staff_password_too_short() {
        let msg = validate_staff_password("k4t-1", "ayse").unwrap_err();
        assert!(msg.contains("at least 8 characters"));
    }

    #[test]
    fn test_staff_password_needs_a_non_letter() {
        assert!(validate_staff_password("kahvaltisaati", "ayse").is_err());
        assert!(validate_staff_password("kahvalti-saati", "ayse").is_ok());
        assert!(validate_staff_password("oda7kat2", "ayse").is_ok());
    }

    #[test]
    fn test_staff_password_may_not_contain_username() {
        let msg = validate_staff_password("Reception2024!", "reception").unwrap_err();
        assert!(msg.contains("username"));
        assert!(validate_staff_password("front-desk-42", "reception").is_ok());
    }
}
