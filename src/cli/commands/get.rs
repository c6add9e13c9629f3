//! Implementation of the `certcache get` command.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::GetArgs;
use crate::cli::{open_cache, request_context};
use crate::domain::models::Config;

/// Result of `certcache get` when the payload is not streamed to stdout
#[derive(Debug, Serialize)]
pub struct GetOutput {
    /// Requested key
    pub key: String,
    /// Payload length in bytes
    pub bytes: usize,
    /// File the payload was written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Payload for JSON callers without an output file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_base64: Option<String>,
}

impl CommandOutput for GetOutput {
    fn to_human(&self) -> String {
        match self.output {
            Some(ref path) => format!("Wrote {} bytes for {} to {}", self.bytes, self.key, path.display()),
            None => format!("{} bytes for {}", self.bytes, self.key),
        }
    }
}

/// Fetch the payload for `args.key`.
///
/// Raw bytes go to stdout unless `--output` or `--json` is given.
pub async fn execute(args: GetArgs, config: &Config, json_mode: bool) -> Result<()> {
    let cache = open_cache(config).await?;
    let ctx = request_context(config);

    let payload = cache.get(&ctx, &args.key).await?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, &payload)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output(
                &GetOutput {
                    key: args.key,
                    bytes: payload.len(),
                    output: Some(path),
                    payload_base64: None,
                },
                json_mode,
            );
        }
        // JSON cannot carry raw bytes, so the payload travels base64-encoded
        None if json_mode => output(
            &GetOutput {
                key: args.key,
                bytes: payload.len(),
                output: None,
                payload_base64: Some(STANDARD.encode(&payload)),
            },
            true,
        ),
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&payload).await.context("Failed to write payload")?;
            stdout.flush().await.context("Failed to flush stdout")?;
        }
    }

    cache.store().pool().close().await;
    Ok(())
}
