//! Implementation of the `certcache init` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::open_cache;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

/// Result of `certcache init`
#[derive(Debug, Serialize)]
pub struct InitOutput {
    /// Always true; failures are reported through `handle_error`
    pub success: bool,
    /// Database that was prepared
    pub database_url: String,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        format!("Certificate store ready at {}", self.database_url)
    }
}

/// Open the configured database and create the schema if missing.
pub async fn execute(config: &Config, json_mode: bool) -> Result<()> {
    // Opening the cache ensures the schema
    let cache = open_cache(config).await?;
    cache.store().pool().close().await;

    output(
        &InitOutput {
            success: true,
            database_url: config.database.url.clone(),
        },
        json_mode,
    );
    Ok(())
}
