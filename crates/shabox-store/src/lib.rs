//! # shabox Store
//!
//! Storage abstraction for shabox. Provides a trait-based interface for
//! message persistence with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store is a persistent mapping keyed by the *pair* `(digest, message)`,
//! not by digest alone. This makes re-inserting identical content a cheap
//! no-op, and makes a digest collision representable as two rows sharing a
//! digest. Lookup by digest uses a deterministic tie-break: the
//! first-inserted row wins.
//!
//! ## Key Types
//!
//! - [`MessageStore`] - The async trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`InsertOutcome`] - Result of inserting a message
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shabox_core::Sha256Digest;
//! use shabox_store::{InsertOutcome, MessageStore, SqliteStore};
//!
//! async fn example() {
//!     // Open a SQLite database (runs migrations)
//!     let store = SqliteStore::open("shabox.db").unwrap();
//!
//!     // Or use an in-memory database for testing
//!     let store = SqliteStore::open_memory().unwrap();
//!
//!     let digest = Sha256Digest::of("foobar");
//!     let outcome = store.insert(&digest, "foobar").await.unwrap();
//!     assert_eq!(outcome, InsertOutcome::Inserted);
//! }
//! ```

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{InsertOutcome, MessageStore};
