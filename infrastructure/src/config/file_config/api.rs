//! Prediction API configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Raw API configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the prediction service (also `HIKE_API_URL`)
    pub base_url: Option<String>,
    /// Timeout in seconds for each request
    pub timeout_seconds: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
