//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::Envelope;

// == Cache Error Enum ==
/// Unified error type for the cache server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key absent, or present but past its expiration
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Set was called with an empty payload
    #[error("Empty value for key: {0}")]
    EmptyValue(String),

    /// Set payload is not UTF-8
    #[error("Value is not valid UTF-8 for key: {0}")]
    InvalidValue(String),

    /// Expire payload could not be decoded
    #[error("Invalid expire payload: {0}")]
    InvalidExpire(String),

    /// Request path is not `/api/cache/<key>[/<modifier>]`
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// HTTP method has no cache operation
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Store invariant broken
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// Transport status used when this error rejects a request outright.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidPath(_) => StatusCode::FORBIDDEN,
            CacheError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            CacheError::EmptyValue(_)
            | CacheError::InvalidValue(_)
            | CacheError::InvalidExpire(_) => StatusCode::BAD_REQUEST,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        Envelope::failure(self.to_string()).respond(status)
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
