//! Configuration types for the dashboard client

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "PROTEK_API_URL";

/// Base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://api-protek-production.up.railway.app/api";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Apply `PROTEK_API_URL` on top of the loaded configuration
    pub fn apply_env(&mut self) {
        self.apply_api_url(std::env::var(API_URL_ENV).ok());
    }

    fn apply_api_url(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Overriding API base URL from {}: {}", API_URL_ENV, url);
            self.api.base_url = url;
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::ProtekError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
