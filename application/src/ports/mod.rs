//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod prediction_cache;
pub mod prediction_gateway;
pub mod progress;
pub mod telemetry;
