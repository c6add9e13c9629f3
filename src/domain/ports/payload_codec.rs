//! Payload encoding port.

use thiserror::Error;

/// Decoding failure, carrying the codec's message.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CodecError(pub String);

/// Converts raw payload bytes to and from the store's text representation.
pub trait PayloadCodec: Send + Sync {
    /// Encode raw bytes for storage
    fn encode(&self, payload: &[u8]) -> String;

    /// Decode stored text back to the original bytes
    ///
    /// # Errors
    /// * `CodecError` if `data` was not produced by this codec
    fn decode(&self, data: &str) -> Result<Vec<u8>, CodecError>;
}
