//! Pure domain logic for the hotel back office.
//!
//! Nothing in this crate performs I/O. The `db` and `api` crates feed it
//! typed records and act on its answers.

pub mod billing;
pub mod error;
pub mod inventory;
pub mod pagination;
pub mod permissions;
pub mod roles;
pub mod status;
pub mod stay;
pub mod types;
pub mod validation;
