//! Configuration model, deserialized by `ConfigLoader`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for certcache
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Cache request configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// `SQLite` database URL
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connections kept open while idle
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// How long a connection waits on a locked database
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,

    /// How long a caller waits for a pooled connection
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

fn default_database_url() -> String {
    "sqlite:.certcache/certs.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

const fn default_min_connections() -> u32 {
    1
}

const fn default_busy_timeout_secs() -> u64 {
    30
}

const fn default_acquire_timeout_secs() -> u64 {
    3
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Per-request settings applied by callers that build a `RequestContext`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Deadline for each store round trip in milliseconds (none when unset)
    #[serde(default)]
    pub operation_timeout_ms: Option<u64>,
}
