//! Domain layer for hike-predictor
//!
//! This crate contains the form model, validation rules, the form state
//! machine and the prediction values. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Form
//!
//! A fixed sequence of stages ([`StageTable`]) is walked by a
//! [`FormSession`]. Each stage is validated as a whole before the session
//! moves forward; going back never validates.
//!
//! ## Prediction
//!
//! Once the last stage passes, the session produces a [`PredictionRequest`].
//! The service's [`PredictionResult`] is routed into an [`Outcome`]: either
//! a prediction to display or a reason it does not apply.

pub mod config;
pub mod core;
pub mod feedback;
pub mod form;
pub mod prediction;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use feedback::{FeedbackState, Sentiment};
pub use form::{
    field::{FieldChoice, FieldDefinition, FieldKind, FieldName},
    session::{Completion, FormPhase, FormSession, SUBMIT_RETRY_MESSAGE, SubmissionTicket},
    stage::{FormVariant, Stage, StageTable, TenureGroup},
    validation::{validate_field, validate_stage},
    values::{FormValues, ValidationErrors},
};
pub use prediction::{
    hike::{format_confidence, format_hike},
    outcome::{
        NEGATIVE_HEADLINE, NotApplicableReason, Outcome, POSITIVE_HEADLINE, PredictionSummary,
    },
    request::{PredictionRequest, collapse_years},
    result::{PredictionId, PredictionReply, PredictionResult},
};
