//! SQLite database migration management.

use sqlx::SqlitePool;
use thiserror::Error;

/// Errors raised while bringing the schema up to date
#[derive(Debug, Error)]
pub enum MigrationError {
    /// A migration script failed
    #[error("Failed to execute migration {version}: {source}")]
    ExecutionError {
        /// Version of the failing migration (0 for the bookkeeping table)
        version: i64,
        /// Driver error
        #[source]
        source: sqlx::Error,
    },
    /// The recorded schema version could not be read
    #[error("Failed to get schema version: {0}")]
    VersionCheckError(#[source] sqlx::Error),
}

/// An embedded migration script
#[derive(Debug, Clone)]
pub struct Migration {
    /// Monotonic schema version
    pub version: i64,
    /// Short human-readable summary
    pub description: String,
    /// SQL executed to apply the migration
    pub sql: String,
}

/// Applies embedded migrations and tracks them in `schema_migrations`.
pub struct Migrator {
    pool: SqlitePool,
}

impl Migrator {
    /// Create a migrator for `pool`
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply every migration newer than the recorded schema version.
    ///
    /// Migration scripts are written with `IF NOT EXISTS` and `INSERT OR IGNORE`
    /// so replicas racing on the same database converge on the same schema.
    pub async fn run_embedded_migrations(&self, migrations: Vec<Migration>) -> Result<usize, MigrationError> {
        self.ensure_migrations_table().await?;
        let current_version = self.get_current_version().await?;
        let pending: Vec<_> = migrations.into_iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            return Ok(0);
        }

        for migration in &pending {
            self.apply_migration(migration).await?;
            tracing::info!(
                version = migration.version,
                description = %migration.description,
                "applied migration"
            );
        }

        Ok(pending.len())
    }

    async fn ensure_migrations_table(&self) -> Result<(), MigrationError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now')),
                description TEXT
            )"
        )
        .execute(&self.pool)
        .await
        .map_err(|e| MigrationError::ExecutionError { version: 0, source: e })?;
        Ok(())
    }

    /// Highest applied version, or 0 on a fresh database
    pub async fn get_current_version(&self) -> Result<i64, MigrationError> {
        let result: Option<(i64,)> = sqlx::query_as("SELECT COALESCE(MAX(version), 0) FROM schema_migrations")
            .fetch_optional(&self.pool)
            .await
            .map_err(MigrationError::VersionCheckError)?;
        Ok(result.map(|(v,)| v).unwrap_or(0))
    }

    // Must not borrow a transaction: the future has to stay `Send` for
    // `CertificateStore::ensure_schema`. Scripts are idempotent instead.
    async fn apply_migration(&self, migration: &Migration) -> Result<(), MigrationError> {
        let version = migration.version;
        sqlx::raw_sql(&migration.sql)
            .execute(&self.pool)
            .await
            .map_err(|source| MigrationError::ExecutionError { version, source })?;
        Ok(())
    }
}

/// Version 1: the `certs` table.
pub fn create_certs_migration() -> Migration {
    Migration {
        version: 1,
        description: "Create certs table".to_string(),
        sql: include_str!("../../../migrations/001_create_certs.sql").to_string(),
    }
}

/// Every embedded migration, in version order.
pub fn all_embedded_migrations() -> Vec<Migration> {
    vec![create_certs_migration()]
}
