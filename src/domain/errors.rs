//! Domain errors for the certificate cache.

use thiserror::Error;

use super::ports::StoreError;

/// Errors surfaced by `CertificateCache` operations.
///
/// Store failures are wrapped, never retried or suppressed. Callers that need
/// the adapter-level detail can match on the inner `StoreError`.
#[derive(Debug, Error)]
pub enum CacheError {
    /// No record exists for the key, or this instance deleted it
    #[error("Certificate not found: {0}")]
    NotFound(String),

    /// The stored data could not be decoded by the configured codec
    #[error("Corrupt certificate record {key}: {reason}")]
    CorruptRecord { key: String, reason: String },

    /// A store lookup failed
    #[error("Store read failed: {0}")]
    StoreReadFailed(#[source] StoreError),

    /// A store insert, update, delete or schema check failed
    #[error("Store write failed: {0}")]
    StoreWriteFailed(#[source] StoreError),

    /// The request context was cancelled before the store call finished
    #[error("Operation cancelled")]
    Cancelled,

    /// The request context's deadline passed before the store call finished
    #[error("Operation deadline exceeded")]
    DeadlineExceeded,
}

impl CacheError {
    /// True when the key has no record, either in the store or because this
    /// process deleted it.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
