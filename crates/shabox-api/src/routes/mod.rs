//! Route modules for the shabox API surface.
//!
//! - `messages` — the `/messages` endpoints: add a message, retrieve a
//!   message by its SHA-256 digest.

pub mod messages;
