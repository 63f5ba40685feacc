//! glance client application.
//!
//! Wires the services together at startup: API client, UI surface,
//! router, timing recorder, metrics sender and theme store are
//! constructed explicitly and passed by reference — no ambient
//! globals. Page events (navigation clicks, feedback submissions,
//! theme toggles) arrive over a channel and drive the router and API.

pub mod app;
pub mod config;
pub mod error;
pub mod events;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use events::UiEvent;
