//! # shabox Core
//!
//! Pure primitives for shabox: the digest engine.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation from message text to its content-addressed identifier.
//!
//! ## Key Types
//!
//! - [`Sha256Digest`] - Content-addressed identifier (SHA-256 hash)
//!
//! ## Canonical form
//!
//! Digests are rendered everywhere as 64-character **uppercase** hexadecimal.
//! Parsing is case-insensitive so callers may present lowercase digests.

pub mod digest;
pub mod error;

pub use digest::Sha256Digest;
pub use error::CoreError;
