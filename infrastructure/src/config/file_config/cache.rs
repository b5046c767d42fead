//! Prediction id cache configuration from TOML (`[cache]` section)

use serde::{Deserialize, Serialize};

/// Raw cache configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    pub enabled: bool,
    /// File holding the last prediction id; defaults to the data directory
    pub path: Option<String>,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}
