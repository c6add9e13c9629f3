//! certcache - two-tier TLS certificate cache
//!
//! Certificates are kept in a shared SQLite table so several replicas can see
//! the same set, with a process-local index in front of it so repeat lookups
//! never leave the process.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): records, errors and the store/codec ports
//! - **Adapters** (`adapters`): SQLite and in-memory stores, base64 codec
//! - **Service Layer** (`services`): the `CertificateCache` and request contexts
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use certcache::{CertificateCache, RequestContext, SqliteCertificateStore};
//! use certcache::adapters::sqlite::create_pool;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let pool = create_pool("sqlite:certs.db", None).await?;
//! let cache = CertificateCache::new(Arc::new(SqliteCertificateStore::new(pool))).await?;
//!
//! let ctx = RequestContext::background();
//! cache.put(&ctx, "example.com", b"-----BEGIN CERTIFICATE-----").await?;
//! let pem = cache.get(&ctx, "example.com").await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use adapters::{Base64Codec, InMemoryCertificateStore, SqliteCertificateStore, StoreStats};
pub use domain::errors::{CacheError, CacheResult};
pub use domain::models::{CacheConfig, CertificateRecord, Config, DatabaseConfig, LoggingConfig};
pub use domain::ports::{CertificateStore, CodecError, PayloadCodec, StoreError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CertificateCache, IndexState, RequestContext};
