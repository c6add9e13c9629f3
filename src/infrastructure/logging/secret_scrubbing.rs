//! Redaction of key material in log text.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static PRIVATE_KEY_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-----BEGIN ([A-Z0-9 ]*)PRIVATE KEY-----[\s\S]*?-----END ([A-Z0-9 ]*)PRIVATE KEY-----")
        .expect("private key pattern is valid")
});

// Long unbroken base64 runs: encoded keys, account secrets, raw DER.
static BASE64_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9+/]{64,}={0,2}").expect("base64 pattern is valid")
});

/// Redacts key material from text before it reaches a log line.
///
/// Certificate PEM blocks survive apart from their base64 bodies, so a log
/// still shows which kinds of blocks a payload carried.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Create a scrubber
    pub const fn new() -> Self {
        Self
    }

    /// Return `message` with key material replaced; borrows when nothing matched.
    pub fn scrub<'a>(&self, message: &'a str) -> Cow<'a, str> {
        let without_keys = PRIVATE_KEY_BLOCK.replace_all(message, "[PRIVATE_KEY_REDACTED]");
        if BASE64_RUN.is_match(&without_keys) {
            Cow::Owned(
                BASE64_RUN
                    .replace_all(&without_keys, "[BASE64_REDACTED]")
                    .into_owned(),
            )
        } else {
            without_keys
        }
    }
}
