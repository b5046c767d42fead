//! Application layer for hike-predictor
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    prediction_cache::{InMemoryPredictionCache, NoPredictionCache, PredictionIdCache},
    prediction_gateway::{GatewayError, PredictionGateway},
    progress::{NoProgress, SubmissionProgress},
    telemetry::{NoTelemetry, TelemetryEvent, TelemetrySink},
};
pub use use_cases::reset_form::ResetFormUseCase;
pub use use_cases::send_feedback::{SendFeedbackError, SendFeedbackUseCase};
pub use use_cases::submit_prediction::{
    SubmitPredictionError, SubmitPredictionUseCase, SubmitStatus,
};
