//! Domain models.

pub mod certificate;
pub mod config;

pub use certificate::CertificateRecord;
pub use config::{CacheConfig, Config, DatabaseConfig, LoggingConfig};
