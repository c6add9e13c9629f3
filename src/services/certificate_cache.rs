//! Two-tier certificate cache.
//!
//! A process-local index sits in front of a shared `CertificateStore`. Reads
//! are served from the index when possible; writes reach the store first and
//! only then update the index, so the index never holds a payload the store
//! rejected. A key this instance deleted stays absent until it puts the key
//! again.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, instrument, warn};

use super::request_context::RequestContext;
use crate::adapters::codec::Base64Codec;
use crate::domain::errors::{CacheError, CacheResult};
use crate::domain::models::CertificateRecord;
use crate::domain::ports::{CertificateStore, PayloadCodec};

#[derive(Debug, Clone)]
enum IndexEntry {
    Cached(Vec<u8>),
    /// Deleted through this instance; Get answers NotFound without the store.
    Absent,
}

/// Process-local view of a key, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// A payload of `len` bytes is held locally
    Cached {
        /// Payload length in bytes
        len: usize,
    },
    /// Deleted through this instance
    Absent,
}

/// Certificate cache over a shared `CertificateStore`.
///
/// Safe to share between tasks behind an `Arc`. Each instance keeps its own
/// index; instances on the same store do not invalidate each other.
pub struct CertificateCache<S: CertificateStore> {
    store: Arc<S>,
    codec: Arc<dyn PayloadCodec>,
    index: RwLock<HashMap<String, IndexEntry>>,
}

impl<S: CertificateStore> CertificateCache<S> {
    /// Build a cache over `store`, ensuring its schema exists first.
    pub async fn new(store: Arc<S>) -> CacheResult<Self> {
        store
            .ensure_schema()
            .await
            .map_err(CacheError::StoreWriteFailed)?;

        Ok(Self {
            store,
            codec: Arc::new(Base64Codec),
            index: RwLock::new(HashMap::new()),
        })
    }

    /// Replace the payload codec. Must match the codec used by every other
    /// writer of the same store.
    #[must_use]
    pub fn with_codec(mut self, codec: impl PayloadCodec + 'static) -> Self {
        self.codec = Arc::new(codec);
        self
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Fetch the payload for `key`.
    ///
    /// The index fast path never awaits and ignores `ctx`.
    #[instrument(skip_all, fields(key = %key))]
    pub async fn get(&self, ctx: &RequestContext, key: &str) -> CacheResult<Vec<u8>> {
        let cached = self.read_index().get(key).cloned();
        match cached {
            Some(IndexEntry::Cached(payload)) if !payload.is_empty() => {
                debug!("index hit");
                return Ok(payload);
            }
            Some(IndexEntry::Absent) => {
                debug!("index marks key absent");
                return Err(CacheError::NotFound(key.to_string()));
            }
            _ => {}
        }

        debug!("index miss, reading through");
        let record = ctx
            .run(self.store.find_by_key(key))
            .await?
            .map_err(CacheError::StoreReadFailed)?
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;

        let payload = self.codec.decode(&record.data).map_err(|e| {
            warn!(error = %e, "stored payload failed to decode");
            CacheError::CorruptRecord {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;

        // A Put or Delete that finished while the store read was in flight
        // has already written a newer entry; leave it in place.
        match self.write_index().entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(IndexEntry::Cached(payload.clone()));
            }
            Entry::Occupied(mut slot) => {
                if matches!(slot.get(), IndexEntry::Cached(existing) if existing.is_empty()) {
                    slot.insert(IndexEntry::Cached(payload.clone()));
                }
            }
        }

        Ok(payload)
    }

    /// Insert or update the record for `key`, then cache the raw payload.
    ///
    /// A store failure leaves the index untouched.
    #[instrument(skip_all, fields(key = %key, len = payload.len()))]
    pub async fn put(&self, ctx: &RequestContext, key: &str, payload: &[u8]) -> CacheResult<()> {
        let data = self.codec.encode(payload);

        let existing = ctx
            .run(self.store.find_by_key(key))
            .await?
            .map_err(CacheError::StoreReadFailed)?;

        let written = match existing {
            None => {
                debug!("inserting new record");
                let record = CertificateRecord::new(key, data);
                self.run_write(ctx, key, self.store.insert(&record)).await?
            }
            Some(_) => {
                debug!("updating existing record");
                self.run_write(ctx, key, self.store.update_payload(key, &data))
                    .await?
            }
        };
        written.map_err(CacheError::StoreWriteFailed)?;

        self.write_index()
            .insert(key.to_string(), IndexEntry::Cached(payload.to_vec()));
        Ok(())
    }

    /// Remove the record for `key` and mark it absent in the index.
    ///
    /// Deleting a key that has no record succeeds.
    #[instrument(skip_all, fields(key = %key))]
    pub async fn delete(&self, ctx: &RequestContext, key: &str) -> CacheResult<()> {
        self.run_write(ctx, key, self.store.delete_by_key(key))
            .await?
            .map_err(CacheError::StoreWriteFailed)?;

        self.write_index().insert(key.to_string(), IndexEntry::Absent);
        debug!("record deleted");
        Ok(())
    }

    /// The index's view of `key`; `None` when this instance has never seen it.
    pub fn cached_state(&self, key: &str) -> Option<IndexState> {
        self.read_index().get(key).map(|entry| match entry {
            IndexEntry::Cached(payload) => IndexState::Cached { len: payload.len() },
            IndexEntry::Absent => IndexState::Absent,
        })
    }

    /// Number of keys the index holds, absent markers included.
    pub fn index_len(&self) -> usize {
        self.read_index().len()
    }

    /// Run a store write under `ctx`.
    ///
    /// If the context fires mid-write the store outcome is unknown. A cached
    /// payload may no longer match the store, so it is dropped and the next
    /// Get reads through. An absent marker is kept: a delete from this
    /// instance is only undone by a Put that completes.
    async fn run_write<F, T>(&self, ctx: &RequestContext, key: &str, write: F) -> CacheResult<T>
    where
        F: std::future::Future<Output = T>,
    {
        match ctx.run(write).await {
            Ok(out) => Ok(out),
            Err(err) => {
                let forgotten = self.forget_cached(key);
                warn!(error = %err, forgotten, "store write interrupted");
                Err(err)
            }
        }
    }

    /// Drop a `Cached` entry for `key`, leaving `Absent` in place.
    fn forget_cached(&self, key: &str) -> bool {
        let mut index = self.write_index();
        let cached = matches!(index.get(key), Some(IndexEntry::Cached(_)));
        if cached {
            index.remove(key);
        }
        cached
    }

    // No critical section leaves the map half-updated, so a poisoned lock is
    // still safe to use.
    fn read_index(&self) -> RwLockReadGuard<'_, HashMap<String, IndexEntry>> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_index(&self) -> RwLockWriteGuard<'_, HashMap<String, IndexEntry>> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }
}
