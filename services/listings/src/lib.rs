//! Data-access layer for the LightBnB vacation-rental listings
//!
//! [`QueryGateway`] turns typed calls into parameterized PostgreSQL
//! statements and maps the rows back into plain records. Prices cross the
//! boundary in major units and are stored as [`Cents`].

pub mod gateway;
pub mod models;
pub mod money;
pub mod repositories;
pub mod search;

pub use gateway::QueryGateway;
pub use money::Cents;
pub use search::{DEFAULT_LIMIT, PropertyFilters};
