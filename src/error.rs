//! Error types for the prefix cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache core and its admin API.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data (empty key, malformed clear request)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Caller is not allowed to use the admin API
    #[error("{0}")]
    Forbidden(String),
}

// == Extractor Rejections ==
impl From<JsonRejection> for CacheError {
    fn from(rejection: JsonRejection) -> Self {
        CacheError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for CacheError {
    fn from(rejection: QueryRejection) -> Self {
        CacheError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Forbidden(_) => StatusCode::FORBIDDEN,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the prefix cache.
pub type Result<T> = std::result::Result<T, CacheError>;
