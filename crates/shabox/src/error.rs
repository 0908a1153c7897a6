//! Error types for the vault.
//!
//! Every vault operation returns a tagged result from this taxonomy. All
//! three kinds are per-request, recoverable outcomes; none terminates the
//! process, and transports are expected to match them exhaustively.

use shabox_store::StoreError;
use thiserror::Error;

/// Errors that can occur during vault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Request payload missing or missing the required message field.
    /// Detected before any storage access.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No record matches the requested digest. A normal, expected outcome,
    /// not a defect.
    #[error("message not found")]
    NotFound,

    /// The persistence layer could not complete a read or write. The
    /// underlying error is kept for logging but must not be surfaced to
    /// clients.
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

/// Result type for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;
