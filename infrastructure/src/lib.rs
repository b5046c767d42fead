//! Infrastructure layer for hike-predictor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod config;
pub mod http;
pub mod telemetry;

// Re-export commonly used types
pub use cache::FilePredictionIdCache;
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_TIMEOUT_SECONDS, FileApiConfig, FileCacheConfig,
    FileConfig, FileFormConfig, FileOutputConfig, FileTelemetryConfig,
};
pub use http::HttpPredictionGateway;
pub use telemetry::JsonlTelemetrySink;
