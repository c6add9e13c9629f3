//! CLI command implementations.

pub mod delete;
pub mod get;
pub mod init;
pub mod put;
