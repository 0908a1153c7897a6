//! # shabox
//!
//! The unified API for shabox - a write-once/read-many text store keyed by
//! content hash rather than by caller-assigned identifier.
//!
//! ## Overview
//!
//! - **Add**: submit a text message, receive its SHA-256 digest back. The
//!   upsert is idempotent: identical content is never stored twice.
//! - **Retrieve**: present a digest (any case), receive the original text.
//!
//! The vault never talks HTTP; it receives plain strings and returns a
//! tagged result that transports match exhaustively.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shabox::MessageVault;
//! use shabox::store::SqliteStore;
//!
//! async fn example() {
//!     let store = SqliteStore::open("shabox.db").unwrap();
//!     let vault = MessageVault::new(store);
//!
//!     let digest = vault.add_message(Some("foobar".into())).await.unwrap();
//!     let message = vault.retrieve_message(&digest.to_hex()).await.unwrap();
//!     assert_eq!(message, "foobar");
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `shabox::core` - Digest primitives ([`Sha256Digest`])
//! - `shabox::store` - Storage abstraction and SQLite

pub mod error;
pub mod vault;

// Re-export component crates
pub use shabox_core as core;
pub use shabox_store as store;

// Re-export main types for convenience
pub use error::{Result, VaultError};
pub use vault::MessageVault;

pub use shabox_core::Sha256Digest;
pub use shabox_store::{InsertOutcome, MemoryStore, MessageStore, SqliteStore};
