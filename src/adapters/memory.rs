//! Process-local implementation of `CertificateStore`.
//!
//! Useful when a single instance needs no durability, and for observing store
//! traffic: every call is counted in `StoreStats`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::models::CertificateRecord;
use crate::domain::ports::{CertificateStore, StoreError};

/// Per-operation call counters.
#[derive(Debug, Default)]
pub struct StoreStats {
    finds: AtomicUsize,
    inserts: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
    schema_checks: AtomicUsize,
}

impl StoreStats {
    /// `find_by_key` calls
    pub fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    /// `insert` calls, including conflicts
    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    /// `update_payload` calls
    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// `delete_by_key` calls
    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    /// `ensure_schema` calls
    pub fn schema_checks(&self) -> usize {
        self.schema_checks.load(Ordering::SeqCst)
    }
}

/// `CertificateStore` held in a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryCertificateStore {
    records: RwLock<HashMap<String, String>>,
    stats: StoreStats,
}

impl InMemoryCertificateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Call counters for this store
    pub const fn stats(&self) -> &StoreStats {
        &self.stats
    }

    /// Number of records held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when no records are held.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Write encoded data directly, bypassing any cache.
    ///
    /// Stands in for another replica writing to the shared store.
    pub async fn put_raw(&self, key: &str, data: &str) {
        self.records
            .write()
            .await
            .insert(key.to_string(), data.to_string());
    }
}

#[async_trait]
impl CertificateStore for InMemoryCertificateStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.stats.schema_checks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<CertificateRecord>, StoreError> {
        self.stats.finds.fetch_add(1, Ordering::SeqCst);
        let records = self.records.read().await;
        Ok(records
            .get(key)
            .map(|data| CertificateRecord::new(key, data.clone())))
    }

    async fn insert(&self, record: &CertificateRecord) -> Result<(), StoreError> {
        self.stats.inserts.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.write().await;
        if records.contains_key(&record.key) {
            return Err(StoreError::Conflict(record.key.clone()));
        }
        records.insert(record.key.clone(), record.data.clone());
        Ok(())
    }

    async fn update_payload(&self, key: &str, data: &str) -> Result<(), StoreError> {
        self.stats.updates.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.write().await;
        match records.get_mut(key) {
            Some(existing) => {
                *existing = data.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), StoreError> {
        self.stats.deletes.fetch_add(1, Ordering::SeqCst);
        self.records.write().await.remove(key);
        Ok(())
    }
}
