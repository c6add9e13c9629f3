//! Domain layer for the certificate cache
//!
//! This module contains the record model, configuration types, and the port
//! traits that storage adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{CacheError, CacheResult};
