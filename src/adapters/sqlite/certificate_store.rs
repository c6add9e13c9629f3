//! SQLite implementation of the CertificateStore.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::migrations::{all_embedded_migrations, Migrator};
use crate::domain::models::CertificateRecord;
use crate::domain::ports::{CertificateStore, StoreError};

/// `CertificateStore` over the `certs` table.
#[derive(Clone)]
pub struct SqliteCertificateStore {
    pool: SqlitePool,
}

impl SqliteCertificateStore {
    /// Wrap an existing pool. The schema is created by `ensure_schema`.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CertificateStore for SqliteCertificateStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Migrator::new(self.pool.clone())
            .run_embedded_migrations(all_embedded_migrations())
            .await
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        Ok(())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<CertificateRecord>, StoreError> {
        let row: Option<CertRow> = sqlx::query_as(
            "SELECT cert_key, data FROM certs WHERE cert_key = ?"
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, record: &CertificateRecord) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO certs (cert_key, data, created_at, updated_at) VALUES (?, ?, ?, ?)"
        )
        .bind(&record.key)
        .bind(&record.data)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StoreError::Conflict(record.key.clone())
            }
            other => store_error(other),
        })?;

        Ok(())
    }

    async fn update_payload(&self, key: &str, data: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE certs SET data = ?, updated_at = ? WHERE cert_key = ?"
        )
        .bind(data)
        .bind(Utc::now().to_rfc3339())
        .bind(key)
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(key.to_string()));
        }

        Ok(())
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM certs WHERE cert_key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            tracing::debug!(key = %key, "delete matched no record");
        }

        Ok(())
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StoreError::ConnectionPool(err.to_string())
        }
        other => StoreError::Query(other),
    }
}

#[derive(sqlx::FromRow)]
struct CertRow {
    cert_key: String,
    data: String,
}

impl From<CertRow> for CertificateRecord {
    fn from(row: CertRow) -> Self {
        Self {
            key: row.cert_key,
            data: row.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::create_test_pool;

    async fn setup_store() -> SqliteCertificateStore {
        let pool = create_test_pool().await.expect("failed to create test pool");
        let store = SqliteCertificateStore::new(pool);
        store.ensure_schema().await.expect("failed to ensure schema");
        store
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = setup_store().await;

        store
            .insert(&CertificateRecord::new("example.com", "dGVzdERhdGE="))
            .await
            .expect("failed to insert");

        let found = store
            .find_by_key("example.com")
            .await
            .expect("failed to find")
            .expect("record should exist");
        assert_eq!(found.key, "example.com");
        assert_eq!(found.data, "dGVzdERhdGE=");

        assert!(store.find_by_key("other.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_existing_key_is_conflict() {
        let store = setup_store().await;
        let record = CertificateRecord::new("example.com", "AAAA");

        store.insert(&record).await.expect("first insert");
        let result = store.insert(&record).await;

        assert!(matches!(result, Err(StoreError::Conflict(key)) if key == "example.com"));
    }

    #[tokio::test]
    async fn test_update_payload() {
        let store = setup_store().await;
        store
            .insert(&CertificateRecord::new("example.com", "AAAA"))
            .await
            .unwrap();

        store.update_payload("example.com", "BBBB").await.expect("update");

        let found = store.find_by_key("example.com").await.unwrap().unwrap();
        assert_eq!(found.data, "BBBB");
    }

    #[tokio::test]
    async fn test_update_missing_key_is_not_found() {
        let store = setup_store().await;
        let result = store.update_payload("missing", "BBBB").await;
        assert!(matches!(result, Err(StoreError::NotFound(key)) if key == "missing"));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = setup_store().await;
        store
            .insert(&CertificateRecord::new("example.com", "AAAA"))
            .await
            .unwrap();

        store.delete_by_key("example.com").await.expect("first delete");
        store.delete_by_key("example.com").await.expect("second delete");

        assert!(store.find_by_key("example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_closed_pool_is_connection_error() {
        let store = setup_store().await;
        store.pool().close().await;

        let result = store.find_by_key("example.com").await;
        assert!(matches!(result, Err(StoreError::ConnectionPool(_))));
    }

    #[tokio::test]
    async fn test_ensure_schema_twice() {
        let store = setup_store().await;
        store.ensure_schema().await.expect("second ensure_schema");
    }
}
