//! Error types for the fallback cache
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
/// Unified error type for the fallback cache and its server.
///
/// A lookup that finds nothing is not an error in the core: `match_key`
/// returns `Ok(None)`. `NotFound` exists only so the HTTP layer can render
/// that empty result as a 404.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Query key lacks a priority attribute slot, or a relaxation step
    /// referenced a slot the candidate does not have
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Priority list is empty or names an attribute twice
    #[error("Invalid priority list: {0}")]
    InvalidPriority(String),

    /// No stored entry at any relaxation level
    #[error("No match: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Seed table could not be read or parsed
    #[error("Load failed: {0}")]
    Load(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidKey(_)
            | CacheError::InvalidPriority(_)
            | CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the fallback cache.
pub type Result<T> = std::result::Result<T, CacheError>;
