//! What the user sees after a successful submission

use super::hike::{format_confidence, format_hike};
use super::result::{PredictionId, PredictionReply, PredictionResult};
use crate::core::error::DomainError;
use crate::form::field::FieldName;
use crate::form::values::FormValues;
use serde::Serialize;

pub const POSITIVE_HEADLINE: &str = "Good news! You're likely to be promoted!";
pub const NEGATIVE_HEADLINE: &str = "Keep up the great work! Continue building your skills.";

/// Why a prediction is not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotApplicableReason {
    /// Interns need a pre-placement offer before a promotion forecast applies
    Intern,
}

/// Result of a completed submission.
///
/// Chosen once, from the submitted input rather than the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Prediction(PredictionResult),
    NotApplicable { reason: NotApplicableReason },
}

impl Outcome {
    /// Route a service reply according to the collected values.
    ///
    /// Interns get [`Outcome::NotApplicable`] whatever the body holds; the
    /// body is only parsed when a prediction will be shown.
    pub fn route(values: &FormValues, reply: PredictionReply) -> Result<Self, DomainError> {
        if values.get(FieldName::EmploymentType) == "intern" {
            return Ok(Outcome::NotApplicable {
                reason: NotApplicableReason::Intern,
            });
        }
        reply.into_result().map(Outcome::Prediction)
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        match self {
            Outcome::Prediction(result) => Some(result),
            Outcome::NotApplicable { .. } => None,
        }
    }

    pub fn prediction_id(&self) -> Option<&PredictionId> {
        self.prediction().and_then(|r| r.prediction_id.as_ref())
    }
}

/// Display-ready strings for a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionSummary {
    pub promotion_likely: bool,
    pub headline: &'static str,
    pub confidence: String,
    pub min_hike: String,
    pub max_hike: String,
}

impl From<&PredictionResult> for PredictionSummary {
    fn from(result: &PredictionResult) -> Self {
        Self {
            promotion_likely: result.promotion_likelihood,
            headline: if result.promotion_likelihood {
                POSITIVE_HEADLINE
            } else {
                NEGATIVE_HEADLINE
            },
            confidence: format_confidence(result.confidence_score),
            min_hike: format_hike(result.min_hike),
            max_hike: format_hike(result.max_hike),
        }
    }
}
