//! Repositories for database operations
//!
//! Each repository owns a handle to the shared pool and runs every statement
//! under the configured query timeout.

pub mod property;
pub mod reservation;
pub mod user;

pub use property::PropertyRepository;
pub use reservation::ReservationRepository;
pub use user::UserRepository;
