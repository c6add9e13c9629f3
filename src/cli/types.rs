//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "certcache")]
#[command(about = "certcache - durable TLS certificate cache", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to certcache.yaml layered with certcache.local.yaml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Database URL, overriding the configured one
    #[arg(long, global = true, value_name = "URL")]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the certificate table if it does not exist
    Init,

    /// Print a stored payload
    Get(GetArgs),

    /// Store a payload, replacing any existing one
    Put(PutArgs),

    /// Remove a stored payload
    Delete(DeleteArgs),
}

/// Print a stored payload
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Cache key, e.g. a hostname
    pub key: String,

    /// Write the payload to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Store a payload, replacing any existing one
#[derive(Args, Debug)]
pub struct PutArgs {
    /// Cache key, e.g. a hostname
    pub key: String,

    /// Read the payload from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Remove a stored payload
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Cache key, e.g. a hostname
    pub key: String,
}
