//! Error types for glance-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
