//! # shabox-api — Axum HTTP transport for shabox
//!
//! The REST surface over the message vault:
//!
//! | Method | Path                 | Success body              |
//! |--------|----------------------|---------------------------|
//! | POST   | `/messages`          | `{"digest": "<64-hex>"}`  |
//! | GET    | `/messages/:digest`  | `{"message": "<text>"}`   |
//!
//! All responses, success and error alike, are JSON. Error bodies are
//! `{"err_msg": "<human-readable string>"}` with the status mapping
//! invalid input → 400, not found → 404, storage failure → 500.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    routes::messages::router().with_state(state)
}
