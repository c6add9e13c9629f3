//! Adapters implementing the domain ports.

pub mod codec;
pub mod memory;
pub mod sqlite;

pub use codec::Base64Codec;
pub use memory::{InMemoryCertificateStore, StoreStats};
pub use sqlite::SqliteCertificateStore;
