//! Error types for glance-api.

use thiserror::Error;

/// API error types.
///
/// Transport failures, non-success statuses and malformed response
/// bodies all collapse into the single `Http` kind; callers only ever
/// see one failure shape from the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API error: {0}")]
    Http(String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
