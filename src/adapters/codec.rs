//! Payload codecs.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::domain::ports::{CodecError, PayloadCodec};

/// Standard-alphabet, padded base64.
///
/// Matches the `data` column written by existing deployments, so records
/// created by earlier writers stay readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl PayloadCodec for Base64Codec {
    fn encode(&self, payload: &[u8]) -> String {
        STANDARD.encode(payload)
    }

    fn decode(&self, data: &str) -> Result<Vec<u8>, CodecError> {
        STANDARD
            .decode(data)
            .map_err(|e| CodecError(e.to_string()))
    }
}
