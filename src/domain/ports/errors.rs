//! Errors returned by store adapters.

use thiserror::Error;

/// Store adapter errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists for the key
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Insert hit an existing record
    #[error("Record already exists: {0}")]
    Conflict(String),

    /// Driver-level query failure
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// Schema creation failed
    #[error("Migration error: {0}")]
    Migration(String),

    /// No connection could be obtained from the pool
    #[error("Connection pool error: {0}")]
    ConnectionPool(String),

    /// The backing store cannot serve requests
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
