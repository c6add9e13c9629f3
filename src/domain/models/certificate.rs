//! Durable certificate record model.

/// A persisted key/payload pair.
///
/// `data` holds the payload in the store's text-safe encoding, produced by a
/// `PayloadCodec`. The cache never interprets the decoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    /// Unique identifier, typically a hostname or ACME account key name
    pub key: String,
    /// Encoded payload as stored
    pub data: String,
}

impl CertificateRecord {
    /// Create a record from a key and already-encoded data
    pub fn new(key: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            data: data.into(),
        }
    }
}
