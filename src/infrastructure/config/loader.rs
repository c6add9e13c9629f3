//! Layered configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["json", "pretty"];
const VALID_ROTATIONS: [&str; 3] = ["daily", "hourly", "never"];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `database.url` is blank
    #[error("Database URL cannot be empty")]
    EmptyDatabaseUrl,

    /// `database.max_connections` is zero
    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    /// `database.min_connections` exceeds `max_connections`
    #[error("Invalid pool bounds: min_connections ({0}) exceeds max_connections ({1})")]
    InvalidPoolBounds(u32, u32),

    /// `logging.level` is not a tracing level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// `logging.format` is neither json nor pretty
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// `logging.rotation` is not daily, hourly or never
    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    /// `cache.operation_timeout_ms` is zero
    #[error("Invalid operation_timeout_ms: must be greater than 0")]
    InvalidOperationTimeout,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. certcache.yaml in the working directory
    /// 3. certcache.local.yaml (optional local overrides)
    /// 4. Environment variables (CERTCACHE_* prefix, `__` separates sections)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("certcache.yaml"))
            .merge(Yaml::file("certcache.local.yaml"))
            .merge(Env::prefixed("CERTCACHE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("CERTCACHE_").split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.database.url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }

        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(
                config.database.max_connections,
            ));
        }

        if config.database.min_connections > config.database.max_connections {
            return Err(ConfigError::InvalidPoolBounds(
                config.database.min_connections,
                config.database.max_connections,
            ));
        }

        if !VALID_LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if !VALID_LOG_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if !VALID_ROTATIONS.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        if config.cache.operation_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidOperationTimeout);
        }

        Ok(())
    }
}
