//! Application configuration.

use crate::error::{AppError, AppResult};
use glance_ui::UiConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend origin; the `/api` prefix is appended per request.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Route rendered by the initial navigation.
    #[serde(default = "default_route")]
    pub default_route: String,
    /// Path of the preference file (theme etc.).
    #[serde(default = "default_prefs_path")]
    pub prefs_path: String,
    /// UI behavior (notification dismiss delay).
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_route() -> String {
    "dashboard".to_string()
}

fn default_prefs_path() -> String {
    "glance_prefs.json".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_route: default_route(),
            prefs_path: default_prefs_path(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &str) -> AppResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::warn!(path = %path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_route, "dashboard");
        assert_eq!(config.ui.dismiss_delay_ms, 5_000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(r#"base_url = "http://example.test""#).unwrap();
        assert_eq!(config.base_url, "http://example.test");
        assert_eq!(config.default_route, "dashboard");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default("does/not/exist.toml").unwrap();
        assert_eq!(config.base_url, default_base_url());
    }
}
