//! Common library for the LightBnB data-access layer
//!
//! This crate provides the pieces shared by every repository: PostgreSQL
//! pool configuration and initialisation, a health check, the per-query
//! timeout guard and the typed [`error::DatabaseError`].
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, init_pool, health_check};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     let is_healthy = health_check(&pool).await?;
//!     println!("Database health check: {}", is_healthy);
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
