//! Durable record storage port.

use async_trait::async_trait;

use super::errors::StoreError;
use crate::domain::models::CertificateRecord;

/// Repository interface for durable certificate records
///
/// Implementations hold at most one record per key. The store is shared by
/// every cache instance pointed at it and is the single source of truth.
#[async_trait]
pub trait CertificateStore: Send + Sync {
    /// Create the record table if it does not exist
    ///
    /// Must be idempotent; called once when a cache is constructed.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Look up a record by key
    ///
    /// # Returns
    /// * `Ok(Some(record))` if found
    /// * `Ok(None)` if no record exists for the key
    /// * `Err(StoreError)` on query failure
    async fn find_by_key(&self, key: &str) -> Result<Option<CertificateRecord>, StoreError>;

    /// Insert a new record
    ///
    /// # Errors
    /// * `StoreError::Conflict` if a record already exists for the key
    async fn insert(&self, record: &CertificateRecord) -> Result<(), StoreError>;

    /// Replace only the payload of an existing record
    ///
    /// # Errors
    /// * `StoreError::NotFound` if no record exists for the key
    async fn update_payload(&self, key: &str, data: &str) -> Result<(), StoreError>;

    /// Delete the record for a key
    ///
    /// Deleting a key with no record succeeds.
    async fn delete_by_key(&self, key: &str) -> Result<(), StoreError>;
}
