//! API error type implementing `axum::response::IntoResponse`.
//!
//! Maps the vault's tagged error taxonomy to HTTP status codes and
//! `{"err_msg": ...}` JSON bodies. Storage failures are logged with their
//! underlying detail but surface to clients with a fixed generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use shabox::VaultError;
use thiserror::Error;

/// JSON error response body. Every error, whatever its status code, is
/// serialized in this shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub err_msg: String,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload missing, malformed, or missing the message field (400).
    #[error("{0}")]
    InvalidInput(String),

    /// No message matches the requested digest (404).
    #[error("Message not found")]
    NotFound,

    /// The persistence layer failed (500). `public_msg` is what clients see;
    /// the source error is logged only.
    #[error("{public_msg}")]
    Storage {
        public_msg: &'static str,
        #[source]
        source: VaultError,
    },
}

impl ApiError {
    /// Rejection for a body that is not parseable JSON.
    pub fn not_json() -> Self {
        Self::InvalidInput("Invalid content type, expected JSON".to_string())
    }

    /// Map a vault error from the add-message path.
    pub fn on_add(err: VaultError) -> Self {
        match err {
            VaultError::InvalidInput(msg) => {
                Self::InvalidInput(format!("Invalid JSON request, {}", msg))
            }
            VaultError::NotFound => Self::NotFound,
            VaultError::Storage(_) => Self::Storage {
                public_msg: "Failed to add message and its SHA256 digest to database",
                source: err,
            },
        }
    }

    /// Map a vault error from the retrieve-message path.
    pub fn on_retrieve(err: VaultError) -> Self {
        match err {
            VaultError::InvalidInput(msg) => Self::InvalidInput(msg),
            VaultError::NotFound => Self::NotFound,
            VaultError::Storage(_) => Self::Storage {
                public_msg: "Failed to retrieve message for the provided SHA256 digest \
                             from database",
                source: err,
            },
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Storage { source, .. } = &self {
            tracing::error!(error = %source, "storage failure");
        }

        let body = ErrorBody {
            err_msg: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
