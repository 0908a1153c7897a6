//! Error types for shabox core.

use thiserror::Error;

/// Core errors that can occur while handling digests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid digest length: expected 64 hex characters, got {0}")]
    InvalidDigestLength(usize),

    #[error("invalid digest: not a hexadecimal string")]
    InvalidDigestEncoding,
}
