//! HTTP JSON client for the glance backend.
//!
//! Wraps outbound requests to the JSON HTTP backend behind a single
//! error kind. All requests carry `Content-Type: application/json` and
//! are issued against a fixed `/api` prefix. There are no retries and
//! no caller-visible timeout control; the caller owns failure handling.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use types::{FeedbackRequest, InitialData, MetricsReport};
