//! SQLite database connection pool management.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::domain::models::DatabaseConfig;

/// Errors raised while opening a database
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// sqlx could not open the pool
    #[error("Failed to create pool: {0}")]
    PoolCreationFailed(#[source] sqlx::Error),
    /// The URL is not a valid SQLite connection string
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),
    /// The database's parent directory could not be created
    #[error("Failed to create directory: {0}")]
    DirectoryCreationFailed(#[source] std::io::Error),
    /// A health-check query failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),
}

/// Pool sizing and timeouts
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Upper bound on open connections
    pub max_connections: u32,
    /// Connections kept open while idle
    pub min_connections: u32,
    /// How long a caller waits for a pooled connection
    pub acquire_timeout: Duration,
    /// How long a statement waits on a locked database
    pub busy_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(3),
            busy_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&DatabaseConfig> for PoolConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            max_connections: config.max_connections,
            min_connections: config.min_connections,
            acquire_timeout: Duration::from_secs(config.acquire_timeout_secs),
            busy_timeout: Duration::from_secs(config.busy_timeout_secs),
        }
    }
}

/// Open a pool for `database_url`, creating the file and its directory if needed.
///
/// Connections use WAL journaling with NORMAL synchronous mode so that several
/// processes can share the database file.
pub async fn create_pool(database_url: &str, config: Option<PoolConfig>) -> Result<SqlitePool, ConnectionError> {
    let config = config.unwrap_or_default();
    ensure_database_directory(database_url)?;

    let connect_options = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| ConnectionError::InvalidDatabaseUrl(database_url.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(config.busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(connect_options)
        .await
        .map_err(ConnectionError::PoolCreationFailed)?;

    tracing::debug!(
        url = %database_url,
        max_connections = config.max_connections,
        "sqlite pool created"
    );

    Ok(pool)
}

/// In-memory pool for tests. The database lives as long as the pool's single
/// connection, so idle reaping is disabled.
pub async fn create_test_pool() -> Result<SqlitePool, ConnectionError> {
    let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|_| ConnectionError::InvalidDatabaseUrl("sqlite::memory:".to_string()))?
        .synchronous(SqliteSynchronous::Normal);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_options)
        .await
        .map_err(ConnectionError::PoolCreationFailed)
}

fn ensure_database_directory(database_url: &str) -> Result<(), ConnectionError> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or(path);

    if path == ":memory:" || path.is_empty() {
        return Ok(());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(ConnectionError::DirectoryCreationFailed)?;
        }
    }
    Ok(())
}

/// Run a trivial query to check the pool can serve requests.
pub async fn verify_connection(pool: &SqlitePool) -> Result<(), ConnectionError> {
    sqlx::query("SELECT 1").fetch_one(pool).await.map_err(ConnectionError::ConnectionFailed)?;
    Ok(())
}
