//! Common test utilities for integration tests
//!
//! Provides shared fixtures for the SQLite-backed cache tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use certcache::adapters::sqlite::{create_pool, create_test_pool, SqliteCertificateStore};
use certcache::CertificateCache;

/// Create a temporary test database path
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn temp_db_url() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path: PathBuf = dir.path().join("certs.db");
    (dir, format!("sqlite:{}", db_path.display()))
}

/// Setup test logging
///
/// Call this at the beginning of tests that need log output.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Cache over a fresh in-memory SQLite database.
pub async fn sqlite_cache() -> CertificateCache<SqliteCertificateStore> {
    let pool = create_test_pool().await.expect("failed to create test pool");
    CertificateCache::new(Arc::new(SqliteCertificateStore::new(pool)))
        .await
        .expect("failed to create cache")
}

/// Cache over a file database, for tests that open several caches on one store.
pub async fn file_cache(url: &str) -> CertificateCache<SqliteCertificateStore> {
    let pool = create_pool(url, None).await.expect("failed to open database");
    CertificateCache::new(Arc::new(SqliteCertificateStore::new(pool)))
        .await
        .expect("failed to create cache")
}

/// Number of rows stored under `key`.
pub async fn row_count(cache: &CertificateCache<SqliteCertificateStore>, key: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM certs WHERE cert_key = ?")
        .bind(key)
        .fetch_one(cache.store().pool())
        .await
        .expect("failed to count rows");
    count
}
