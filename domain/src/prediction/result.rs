//! Prediction response values

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier the service returns for feedback correlation.
///
/// The service may send either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PredictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionId::Number(n) => write!(f, "{}", n),
            PredictionId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for PredictionId {
    fn from(n: i64) -> Self {
        PredictionId::Number(n)
    }
}

impl From<&str> for PredictionId {
    fn from(s: &str) -> Self {
        PredictionId::Text(s.to_string())
    }
}

/// Forecast returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub promotion_likelihood: bool,
    pub min_hike: f64,
    pub max_hike: f64,
    /// Fraction in `[0, 1]`
    pub confidence_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_id: Option<PredictionId>,
}

impl PredictionResult {
    pub fn new(promotion_likelihood: bool, min_hike: f64, max_hike: f64, confidence: f64) -> Self {
        Self {
            promotion_likelihood,
            min_hike,
            max_hike,
            confidence_score: confidence,
            prediction_id: None,
        }
    }

    pub fn with_prediction_id(mut self, id: impl Into<PredictionId>) -> Self {
        self.prediction_id = Some(id.into());
        self
    }

    /// Reject responses that deserialized but cannot be displayed sensibly.
    pub fn check_shape(&self) -> Result<(), DomainError> {
        for (name, value) in [
            ("min_hike", self.min_hike),
            ("max_hike", self.max_hike),
            ("confidence_score", self.confidence_score),
        ] {
            if !value.is_finite() {
                return Err(DomainError::MalformedPrediction(format!(
                    "{} is not a finite number",
                    name
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.confidence_score) {
            return Err(DomainError::MalformedPrediction(format!(
                "confidence_score {} is outside [0, 1]",
                self.confidence_score
            )));
        }
        Ok(())
    }
}

/// Body of a successful response, not yet interpreted.
///
/// Whether it has to be a [`PredictionResult`] depends on the submitted
/// values, so parsing is deferred to [`PredictionReply::into_result`].
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReply {
    body: Value,
}

impl PredictionReply {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Parse the body and reject values that cannot be displayed.
    pub fn into_result(self) -> Result<PredictionResult, DomainError> {
        let result: PredictionResult = serde_json::from_value(self.body)
            .map_err(|e| DomainError::MalformedPrediction(e.to_string()))?;
        result.check_shape()?;
        Ok(result)
    }
}

impl From<PredictionResult> for PredictionReply {
    fn from(result: PredictionResult) -> Self {
        Self::new(serde_json::to_value(result).unwrap_or(Value::Null))
    }
}
