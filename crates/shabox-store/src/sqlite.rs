//! SQLite implementation of the MessageStore trait.
//!
//! This is the primary storage backend for shabox. It uses rusqlite with
//! bundled SQLite, wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use shabox_core::Sha256Digest;

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::{InsertOutcome, MessageStore};

/// SQLite-based store implementation.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking to
/// avoid blocking the async runtime; the mutex guard is scoped to a single
/// call, so the connection is released on every exit path.
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

/// Lock the connection, mapping a poisoned mutex to a database error.
fn lock(conn: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>> {
    conn.lock().map_err(|e| {
        StoreError::Database(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
            Some(format!("mutex poisoned: {}", e)),
        ))
    })
}

/// Map a spawn_blocking join failure to a database error.
fn join_error(e: tokio::task::JoinError) -> StoreError {
    StoreError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
        Some(format!("spawn_blocking failed: {}", e)),
    ))
}

#[async_trait]
impl MessageStore for SqliteStore {
    async fn insert(&self, digest: &Sha256Digest, message: &str) -> Result<InsertOutcome> {
        let digest_hex = digest.to_hex();
        let message = message.to_owned();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock(&conn)?;

            // A duplicate (digest, message) pair is ignored rather than
            // replaced: the observable result is identical and the row
            // count tells us whether a write happened.
            let changed = conn.execute(
                "INSERT OR IGNORE INTO messages (digest, message) VALUES (?1, ?2)",
                params![digest_hex, message],
            )?;

            if changed == 0 {
                Ok(InsertOutcome::AlreadyExists)
            } else {
                Ok(InsertOutcome::Inserted)
            }
        })
        .await
        .map_err(join_error)?
    }

    async fn fetch(&self, digest: &Sha256Digest) -> Result<Option<String>> {
        let digest_hex = digest.to_hex();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock(&conn)?;

            // Tie-break for colliding digests: first-inserted row wins.
            conn.query_row(
                "SELECT message FROM messages WHERE digest = ?1
                 ORDER BY rowid ASC LIMIT 1",
                params![digest_hex],
                |row| row.get(0),
            )
            .optional()
            .map_err(StoreError::from)
        })
        .await
        .map_err(join_error)?
    }

    async fn count(&self, digest: &Sha256Digest) -> Result<u64> {
        let digest_hex = digest.to_hex();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock(&conn)?;

            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM messages WHERE digest = ?1",
                params![digest_hex],
                |row| row.get(0),
            )?;

            Ok(count as u64)
        })
        .await
        .map_err(join_error)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let store = SqliteStore::open_memory().unwrap();
        let digest = Sha256Digest::of("foobar");

        let outcome = store.insert(&digest, "foobar").await.unwrap();
        assert_eq!(outcome, InsertOutcome::Inserted);

        let fetched = store.fetch(&digest).await.unwrap();
        assert_eq!(fetched.as_deref(), Some("foobar"));
    }

    #[tokio::test]
    async fn test_idempotent_insert() {
        let store = SqliteStore::open_memory().unwrap();
        let digest = Sha256Digest::of("foobar");

        let first = store.insert(&digest, "foobar").await.unwrap();
        assert_eq!(first, InsertOutcome::Inserted);

        // Second insert of the same pair is a no-op
        let second = store.insert(&digest, "foobar").await.unwrap();
        assert_eq!(second, InsertOutcome::AlreadyExists);

        assert_eq!(store.count(&digest).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fetch_missing_digest() {
        let store = SqliteStore::open_memory().unwrap();
        let digest = Sha256Digest::from_bytes([0u8; 32]);

        let fetched = store.fetch(&digest).await.unwrap();
        assert_eq!(fetched, None);
    }

    #[tokio::test]
    async fn test_colliding_digest_first_inserted_wins() {
        let store = SqliteStore::open_memory().unwrap();

        // Force two texts under one digest by inserting at the store layer,
        // the way a collision (or a weaker hash function) would manifest.
        let digest = Sha256Digest::of("foobar");
        store.insert(&digest, "first text").await.unwrap();
        store.insert(&digest, "second text").await.unwrap();

        assert_eq!(store.count(&digest).await.unwrap(), 2);

        let fetched = store.fetch(&digest).await.unwrap();
        assert_eq!(fetched.as_deref(), Some("first text"));
    }

    #[tokio::test]
    async fn test_empty_message_is_storable() {
        let store = SqliteStore::open_memory().unwrap();
        let digest = Sha256Digest::of("");

        store.insert(&digest, "").await.unwrap();
        let fetched = store.fetch(&digest).await.unwrap();
        assert_eq!(fetched.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_persistence_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shabox.db");
        let digest = Sha256Digest::of("durable");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.insert(&digest, "durable").await.unwrap();
        }

        // Reopen: migrations re-run (idempotent), data survives.
        let store = SqliteStore::open(&path).unwrap();
        let fetched = store.fetch(&digest).await.unwrap();
        assert_eq!(fetched.as_deref(), Some("durable"));
    }
}
