//! The digest engine: SHA-256 over message text, wrapped in a strong type.
//!
//! A digest is computed over the exact UTF-8 byte sequence of the message.
//! There are no error cases: every string, including the empty string, has
//! a digest.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::CoreError;

/// Number of hex characters in the canonical rendering.
pub const DIGEST_HEX_LEN: usize = 64;

/// A 32-byte SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sha256Digest(pub [u8; 32]);

impl Sha256Digest {
    /// Compute the digest of the given message text.
    ///
    /// Deterministic and pure: the same text always produces the same
    /// digest, in every process.
    pub fn of(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Canonical rendering: 64-character uppercase hexadecimal.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Parse from a hex string, case-insensitively.
    ///
    /// Accepts both `C3AB...` and `c3ab...`; the parsed digest renders back
    /// to the canonical uppercase form.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(CoreError::InvalidDigestLength(s.len()));
        }
        let bytes = hex::decode(s).map_err(|_| CoreError::InvalidDigestEncoding)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha256({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Sha256Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}
