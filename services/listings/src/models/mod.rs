//! Records returned by the gateway
//!
//! These are plain rows from the LightBnB schema. The store owns uniqueness,
//! foreign keys and nullability; the gateway only passes the rows through.

pub mod property;
pub mod reservation;
pub mod user;

pub use property::{NewProperty, Property, PropertyWithRating};
pub use reservation::{Reservation, ReservationWithProperty};
pub use user::{NewUser, User};
