//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.
//!
//! **Security note:** storage errors are logged with full detail but only a
//! generic message is returned to the caller so that SQL or other
//! implementation details never leak to clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lingo_app_core::HistoryError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// All errors that can occur in the lingo-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// No caller identity could be resolved.
    #[error("unauthorized")]
    Unauthorized,

    /// No route matches the request.
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Propagated from the history store.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// One half of the merged feed could not be fetched.
    #[error("history fetch failed: {0}")]
    PartialFetch(String),
}

impl From<HistoryError> for ServerError {
    fn from(e: HistoryError) -> Self {
        match e {
            HistoryError::Unauthorized => ServerError::Unauthorized,
            HistoryError::Validation(m) => ServerError::BadRequest(m),
            HistoryError::Storage(e) => ServerError::Database(e),
            partial @ HistoryError::PartialFetch { .. } => {
                ServerError::PartialFetch(partial.to_string())
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            // Client-facing errors: expose the message directly.
            ServerError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_owned()),
            ServerError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),

            // Internal errors: log the full detail, return a generic message.
            ServerError::Database(e) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
            ServerError::PartialFetch(m) => {
                error!(message = %m, "merged history fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to fetch history".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}
