//! Router error types.

use thiserror::Error;

/// Router error types.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Navigation to a route that was never registered. State is left
    /// untouched; callers decide whether to log or surface it.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Result type alias for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
