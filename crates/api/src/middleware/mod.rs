//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated staff member from a JWT Bearer token.
//! - [`permission::Authorized`] -- Requires a permission key from the access policy.

pub mod auth;
pub mod permission;
