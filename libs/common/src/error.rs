//! Custom error types for the common library
//!
//! Every data-access call resolves to either a value or a [`DatabaseError`];
//! an empty result is a value, never an error.

use std::time::Duration;

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred while establishing the connection pool
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// The statement did not complete within the configured query timeout
    #[error("Database query timed out after {0:?}")]
    Timeout(Duration),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// True for failures raised by the store itself while running a statement.
    pub fn is_query_failure(&self) -> bool {
        matches!(self, DatabaseError::Query(_) | DatabaseError::Timeout(_))
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
