//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod cache;
mod form;
mod output;
mod telemetry;

pub use api::{DEFAULT_TIMEOUT_SECONDS, FileApiConfig};
pub use cache::FileCacheConfig;
pub use form::FileFormConfig;
pub use output::FileOutputConfig;
pub use telemetry::FileTelemetryConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.base_url is not set (use --api-url, HIKE_API_URL or [api] base_url)")]
    MissingApiUrl,

    #[error("api.base_url must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),

    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Prediction service settings
    pub api: FileApiConfig,
    /// Form layout
    pub form: FileFormConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Telemetry sink settings
    pub telemetry: FileTelemetryConfig,
    /// Prediction id cache settings
    pub cache: FileCacheConfig,
}

impl FileConfig {
    /// Validate the configuration and return the API base URL.
    ///
    /// A missing URL is a deployment error, reported before the wizard starts.
    pub fn validate(&self) -> Result<&str, ConfigValidationError> {
        if self.api.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        let url = self
            .api
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigValidationError::MissingApiUrl)?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidApiUrl(url.to_string()));
        }
        Ok(url)
    }

    /// Render the effective configuration as TOML (for `--show-config`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
