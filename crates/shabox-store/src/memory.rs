//! In-memory implementation of the MessageStore trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite but
//! keeps everything in memory with no persistence. Rows are kept in
//! insertion order so the first-inserted tie-break matches SQLite's.

use std::sync::RwLock;

use async_trait::async_trait;
use shabox_core::Sha256Digest;

use crate::error::Result;
use crate::traits::{InsertOutcome, MessageStore};

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    /// (digest hex, message) pairs in insertion order.
    rows: RwLock<Vec<(String, String)>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn insert(&self, digest: &Sha256Digest, message: &str) -> Result<InsertOutcome> {
        let digest_hex = digest.to_hex();
        let mut rows = self.rows.write().unwrap();

        if rows
            .iter()
            .any(|(d, m)| *d == digest_hex && m.as_str() == message)
        {
            return Ok(InsertOutcome::AlreadyExists);
        }

        rows.push((digest_hex, message.to_owned()));
        Ok(InsertOutcome::Inserted)
    }

    async fn fetch(&self, digest: &Sha256Digest) -> Result<Option<String>> {
        let digest_hex = digest.to_hex();
        let rows = self.rows.read().unwrap();

        Ok(rows
            .iter()
            .find(|(d, _)| *d == digest_hex)
            .map(|(_, m)| m.clone()))
    }

    async fn count(&self, digest: &Sha256Digest) -> Result<u64> {
        let digest_hex = digest.to_hex();
        let rows = self.rows.read().unwrap();

        Ok(rows.iter().filter(|(d, _)| *d == digest_hex).count() as u64)
    }
}
