//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty console output on stderr
//! - Optional rolling JSON log files
//! - Redaction of key material in payload-bearing text

pub mod config;
pub mod logger;
pub mod secret_scrubbing;

pub use config::{LogFormat, LogSettings, RotationPolicy};
pub use logger::LoggerImpl;
pub use secret_scrubbing::SecretScrubber;
