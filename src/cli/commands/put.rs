//! Implementation of the `certcache put` command.

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::io::AsyncReadExt;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::PutArgs;
use crate::cli::{open_cache, request_context};
use crate::domain::models::Config;
use crate::infrastructure::logging::SecretScrubber;

/// Result of `certcache put`
#[derive(Debug, Serialize)]
pub struct PutOutput {
    /// Always true; failures are reported through `handle_error`
    pub success: bool,
    /// Stored key
    pub key: String,
    /// Payload length in bytes
    pub bytes: usize,
}

impl CommandOutput for PutOutput {
    fn to_human(&self) -> String {
        format!("Stored {} bytes for {}", self.bytes, self.key)
    }
}

/// Store a payload read from `args.file` or stdin.
pub async fn execute(args: PutArgs, config: &Config, json_mode: bool) -> Result<()> {
    let payload = match args.file {
        Some(ref path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("Failed to read payload from stdin")?;
            buf
        }
    };

    if let Ok(text) = std::str::from_utf8(&payload) {
        tracing::debug!(key = %args.key, payload = %SecretScrubber::new().scrub(text), "storing payload");
    }

    let cache = open_cache(config).await?;
    let ctx = request_context(config);
    cache.put(&ctx, &args.key, &payload).await?;
    cache.store().pool().close().await;

    output(
        &PutOutput {
            success: true,
            key: args.key,
            bytes: payload.len(),
        },
        json_mode,
    );
    Ok(())
}
