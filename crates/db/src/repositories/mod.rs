//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. [`ReservationRepo`] additionally owns the
//! transactional booking workflow.

pub mod charge_repo;
pub mod customer_repo;
pub mod extra_service_repo;
pub mod payment_repo;
pub mod report_repo;
pub mod reservation_repo;
pub mod review_repo;
pub mod room_repo;
pub mod session_repo;
pub mod staff_repo;
pub mod stock_item_repo;

pub use charge_repo::ChargeRepo;
pub use customer_repo::CustomerRepo;
pub use extra_service_repo::ExtraServiceRepo;
pub use payment_repo::PaymentRepo;
pub use report_repo::ReportRepo;
pub use reservation_repo::{BookingError, ReservationRepo, DEFAULT_DELETE_REASON};
pub use review_repo::ReviewRepo;
pub use room_repo::RoomRepo;
pub use session_repo::SessionRepo;
pub use staff_repo::StaffRepo;
pub use stock_item_repo::StockItemRepo;
