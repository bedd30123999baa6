pub mod charge;
pub mod customer;
pub mod extra_service;
pub mod payment;
pub mod report;
pub mod reservation;
pub mod review;
pub mod room;
pub mod session;
pub mod staff;
pub mod stock_item;
