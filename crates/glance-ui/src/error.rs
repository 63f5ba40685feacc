//! Error types for glance-ui.

use thiserror::Error;

/// UI error types.
#[derive(Debug, Error)]
pub enum UiError {
    /// A required page region was absent when the surface was built.
    #[error("Missing page region: {0}")]
    MissingRegion(String),
}

/// Result type alias for UI operations.
pub type UiResult<T> = Result<T, UiError>;
