//! Configuration file loading for hike-predictor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HIKE_*` environment variables (`HIKE_API_URL`, `HIKE_API_TIMEOUT_SECONDS`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./hike.toml` or `./.hike.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/hike-predictor/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_TIMEOUT_SECONDS, FileApiConfig, FileCacheConfig, FileConfig,
    FileFormConfig, FileOutputConfig, FileTelemetryConfig,
};
pub use loader::ConfigLoader;
