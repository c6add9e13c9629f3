//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that adapters must implement:
//! - CertificateStore: durable keyed record storage
//! - PayloadCodec: text-safe encoding of payload bytes
//!
//! The cache service depends only on these traits, never on a concrete driver.

pub mod certificate_store;
pub mod errors;
pub mod payload_codec;

pub use certificate_store::CertificateStore;
pub use errors::StoreError;
pub use payload_codec::{CodecError, PayloadCodec};
