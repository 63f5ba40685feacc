//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(#[from] glance_api::ApiError),

    #[error("UI error: {0}")]
    Ui(#[from] glance_ui::UiError),

    #[error("Router error: {0}")]
    Router(#[from] glance_router::RouterError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] glance_telemetry::TelemetryError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] glance_persistence::PersistenceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
