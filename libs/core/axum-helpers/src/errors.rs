//! Application errors and the `{message}` response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard messages reused across routes.
pub mod messages {
    /// Returned when a path id is not a well-formed ObjectId.
    pub const INVALID_ID: &str = "ID inválido!";
    /// Returned by the 404 fallback for unknown routes.
    pub const UNKNOWN_ROUTE: &str = "Rota não encontrada!";
    /// Generic 500 body; internal detail is logged, never exposed.
    pub const INTERNAL_ERROR: &str = "Um erro aconteceu!";
}

/// JSON body used by every error response (and a few success ones):
/// `{"message": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error type convertible into an HTTP response.
///
/// Domain errors convert into one of these variants; `IntoResponse`
/// produces the status code plus a `{message}` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    /// Client-facing message; the internal detail must already be logged
    /// by whoever constructed this variant.
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    AppError::NotFound(messages::UNKNOWN_ROUTE.to_string()).into_response()
}
