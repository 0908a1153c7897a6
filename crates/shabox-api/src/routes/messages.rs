//! `/messages` route handlers.
//!
//! - `POST /messages`          — Add a message, returning its SHA-256 digest
//! - `GET  /messages/:digest`  — Retrieve the message with the given digest

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Assemble the messages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", post(add_message))
        .route("/messages/:digest", get(retrieve_message))
}

/// Request body for adding a message.
///
/// The field is optional so that `{}` and `{"message": null}` parse; the
/// vault rejects the absent field as invalid input before any storage work.
#[derive(Debug, Deserialize)]
pub struct AddMessageRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to a successful add.
#[derive(Debug, Serialize, Deserialize)]
pub struct DigestResponse {
    /// Canonical 64-char uppercase hex digest of the stored message.
    pub digest: String,
}

/// Response to a successful retrieve.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The original message text, verbatim.
    pub message: String,
}

/// POST /messages
async fn add_message(
    State(state): State<AppState>,
    payload: Result<Json<AddMessageRequest>, JsonRejection>,
) -> Result<Json<DigestResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::not_json())?;

    let digest = state
        .vault
        .add_message(request.message)
        .await
        .map_err(ApiError::on_add)?;

    Ok(Json(DigestResponse {
        digest: digest.to_hex(),
    }))
}

/// GET /messages/:digest
async fn retrieve_message(
    State(state): State<AppState>,
    Path(digest): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state
        .vault
        .retrieve_message(&digest)
        .await
        .map_err(ApiError::on_retrieve)?;

    Ok(Json(MessageResponse { message }))
}
