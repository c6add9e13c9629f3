//! Implementation of the `certcache delete` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::DeleteArgs;
use crate::cli::{open_cache, request_context};
use crate::domain::models::Config;

/// Result of `certcache delete`
#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    /// Always true; failures are reported through `handle_error`
    pub success: bool,
    /// Deleted key
    pub key: String,
}

impl CommandOutput for DeleteOutput {
    fn to_human(&self) -> String {
        format!("Deleted {}", self.key)
    }
}

/// Delete the record for `args.key`. Deleting a missing key succeeds.
pub async fn execute(args: DeleteArgs, config: &Config, json_mode: bool) -> Result<()> {
    let cache = open_cache(config).await?;
    let ctx = request_context(config);
    cache.delete(&ctx, &args.key).await?;
    cache.store().pool().close().await;

    output(
        &DeleteOutput {
            success: true,
            key: args.key,
        },
        json_mode,
    );
    Ok(())
}
