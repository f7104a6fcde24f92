//! Error types for the item pool
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the item pool.
///
/// Adapter refusals are never represented here: they travel back to the
/// caller as `false` or as a list of failed keys.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key fails format or length validation
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Unsupported TTL shape or unparsable configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Item could not be encoded or decoded
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidKey(_) => StatusCode::BAD_REQUEST,
            CacheError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CacheError::Codec(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the item pool.
pub type Result<T> = std::result::Result<T, CacheError>;
