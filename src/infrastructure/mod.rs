//! Infrastructure layer module
//!
//! Process-level concerns that sit outside the cache itself:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
