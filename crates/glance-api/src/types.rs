//! Wire types for the backend contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response shape of `GET /api/initial-data`.
#[derive(Debug, Clone, Deserialize)]
pub struct InitialData {
    /// Performance figure, rendered as a percentage.
    pub performance: f64,
    /// Currently active user count.
    #[serde(rename = "activeUsers")]
    pub active_users: u64,
    /// System status string (e.g., "OK"); lowercased for the CSS class.
    pub status: String,
}

/// Request body of `POST /api/feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub user_id: String,
    pub comments: String,
}

/// Request body of `POST /api/metrics`.
///
/// The acknowledgement from the backend is ignored by the sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Initialization span duration in milliseconds.
    #[serde(rename = "initTime")]
    pub init_time_ms: f64,
    /// When the measurement was taken.
    pub recorded_at: DateTime<Utc>,
}

impl MetricsReport {
    /// Build a report for an initialization span measured just now.
    pub fn init_time(init_time_ms: f64) -> Self {
        Self {
            init_time_ms,
            recorded_at: Utc::now(),
        }
    }
}
