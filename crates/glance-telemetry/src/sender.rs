//! Fire-and-forget metrics delivery.

use glance_api::ApiClient;
use serde::Serialize;
use tracing::{debug, warn};

/// Posts measurement objects to the backend's `/metrics` endpoint.
///
/// Delivery failures are logged and swallowed: telemetry must never
/// interrupt the caller's control flow.
#[derive(Debug, Clone)]
pub struct MetricsSender {
    api: ApiClient,
}

impl MetricsSender {
    /// Create a sender over an existing API client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Post a measurement to the backend. The acknowledgement body and
    /// any delivery error are both discarded.
    pub async fn send<T: Serialize + ?Sized>(&self, report: &T) {
        match self.api.post("/metrics", report).await {
            Ok(_) => debug!("Metrics delivered"),
            Err(e) => warn!(error = %e, "Failed to send metrics"),
        }
    }
}
