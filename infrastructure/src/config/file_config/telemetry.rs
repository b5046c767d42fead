//! Telemetry configuration from TOML (`[telemetry]` section)

use serde::{Deserialize, Serialize};

/// Raw telemetry configuration from TOML
///
/// Telemetry is off unless explicitly enabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTelemetryConfig {
    pub enabled: bool,
    /// JSONL file for events; defaults to the data directory
    pub log_path: Option<String>,
}
