//! MessageStore trait: the abstract interface for message persistence.
//!
//! This trait keeps the service layer storage-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;
use shabox_core::Sha256Digest;

use crate::error::Result;

/// Result of inserting a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The (digest, message) pair was inserted.
    Inserted,
    /// The exact pair already exists (idempotent - not an error).
    AlreadyExists,
}

/// The MessageStore trait: async interface for message persistence.
///
/// All methods are async; the SQLite implementation uses `spawn_blocking`
/// internally to avoid blocking the runtime.
///
/// # Design Notes
///
/// - **Composite key**: rows are keyed by `(digest, message)`. Inserting the
///   same pair twice returns `AlreadyExists`; a different message under the
///   same digest (a hash collision) becomes a second row.
/// - **Deterministic lookup**: when several rows share a digest, `fetch`
///   returns the first-inserted message.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert a (digest, message) pair.
    ///
    /// The write is a single atomic statement. The caller guarantees the
    /// digest is the digest of `message`; the store does not recompute it.
    async fn insert(&self, digest: &Sha256Digest, message: &str) -> Result<InsertOutcome>;

    /// Fetch the message stored under a digest.
    ///
    /// Returns `None` when no row matches. When multiple rows share the
    /// digest, returns the first-inserted message (lowest rowid).
    async fn fetch(&self, digest: &Sha256Digest) -> Result<Option<String>>;

    /// Count the rows stored under a digest.
    async fn count(&self, digest: &Sha256Digest) -> Result<u64>;
}
