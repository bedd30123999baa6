//! Request handlers, one module per resource.
//!
//! Handlers authorize through the extractors in [`crate::middleware`],
//! delegate to the repositories in `hotel_db`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod auth;
pub mod customer;
pub mod dashboard;
pub mod payment;
pub mod report;
pub mod reservation;
pub mod room;
pub mod service;
pub mod staff;
pub mod stock;
