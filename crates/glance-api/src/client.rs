//! HTTP client for the glance backend.

use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Fixed prefix appended to the base URL for every request.
const API_PREFIX: &str = "/api";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the glance JSON backend.
///
/// Thin wrapper over reqwest: no retries, no backoff, no caching.
/// Every response body is parsed as JSON and returned as a raw value;
/// callers deserialize into their own types.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Arguments
    /// * `base_url` - Origin of the backend (e.g., "http://127.0.0.1:8080").
    ///   The `/api` prefix is appended per request.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Issue a GET request against `{base_url}/api{endpoint}`.
    pub async fn get(&self, endpoint: &str) -> ApiResult<serde_json::Value> {
        let url = self.url_for(endpoint);
        debug!(%url, "GET request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Http(format!("HTTP request failed: {e}")))?;

        Self::parse_json(response).await
    }

    /// Issue a POST request with a JSON body against `{base_url}/api{endpoint}`.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> ApiResult<serde_json::Value> {
        let url = self.url_for(endpoint);
        debug!(%url, "POST request");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::Http(format!("HTTP request failed: {e}")))?;

        Self::parse_json(response).await
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{API_PREFIX}{endpoint}", self.base_url)
    }

    /// Reject non-success statuses without touching the body, then
    /// parse the body as JSON.
    async fn parse_json(response: Response) -> ApiResult<serde_json::Value> {
        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            return Err(ApiError::Http(format!("HTTP {}: {reason}", status.as_u16())));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Http(format!("Failed to parse response: {e}")))
    }
}
