//! Domain error types

use crate::form::field::FieldName;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field {0} is not part of this form")]
    FieldNotInForm(FieldName),

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: FieldName, value: String },

    #[error("Malformed prediction: {0}")]
    MalformedPrediction(String),

    #[error("No prediction to give feedback on")]
    FeedbackUnavailable,

    #[error("Feedback is already being sent")]
    FeedbackPending,

    #[error("Feedback was already recorded")]
    FeedbackAlreadyGiven,
}

impl DomainError {
    /// Check if this error is a repeated feedback attempt
    pub fn is_duplicate_feedback(&self) -> bool {
        matches!(
            self,
            DomainError::FeedbackPending | DomainError::FeedbackAlreadyGiven
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            action: "advance",
            phase: "submitting",
        };
        assert_eq!(error.to_string(), "Cannot advance while submitting");
    }

    #[test]
    fn test_is_duplicate_feedback_check() {
        assert!(DomainError::FeedbackPending.is_duplicate_feedback());
        assert!(DomainError::FeedbackAlreadyGiven.is_duplicate_feedback());
        assert!(!DomainError::FeedbackUnavailable.is_duplicate_feedback());
        assert!(!DomainError::UnknownField("x".to_string()).is_duplicate_feedback());
    }
}
