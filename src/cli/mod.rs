//! Command-line interface for operating on a certificate database.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, DeleteArgs, GetArgs, PutArgs};

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::adapters::sqlite::{create_pool, PoolConfig, SqliteCertificateStore};
use crate::domain::errors::CacheError;
use crate::domain::models::Config;
use crate::services::{CertificateCache, RequestContext};

/// Exit status for a key with no record.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Open the configured database and build a cache over it.
pub async fn open_cache(config: &Config) -> Result<CertificateCache<SqliteCertificateStore>> {
    let pool = create_pool(&config.database.url, Some(PoolConfig::from(&config.database)))
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;

    let store = Arc::new(SqliteCertificateStore::new(pool));
    CertificateCache::new(store)
        .await
        .context("Failed to prepare certificate store")
}

/// Request context carrying the configured per-operation timeout.
pub fn request_context(config: &Config) -> RequestContext {
    RequestContext::from_timeout_ms(config.cache.operation_timeout_ms)
}

/// Report a failed command and exit.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let not_found = err
        .downcast_ref::<CacheError>()
        .is_some_and(CacheError::is_not_found);

    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
            "not_found": not_found,
        });
        output::print_json(&body);
    } else {
        eprintln!("Error: {err:#}");
    }

    std::process::exit(if not_found { EXIT_NOT_FOUND } else { 1 });
}
