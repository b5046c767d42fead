//! Form state machine
//!
//! A [`FormSession`] owns everything one user fills in: values, the current
//! validation errors, the phase, and, once submitted, the outcome and its
//! feedback state.
//!
//! # Phases
//!
//! ```text
//! Editing(0) --next--> Editing(1) --next--> Editing(2)
//!     ^  <--previous--      <--previous--      |
//!     |                                      submit (valid)
//!     |                                        v
//!     |                                    Submitting --failure--> Editing(2) + submit_error
//!     |                                        | success
//!     |                                        v
//!     +------------------reset---------- Completed(outcome)
//! ```
//!
//! `reset` is legal from every phase and bumps the session generation. A
//! submission ticket carries the generation it was issued under; completing
//! it after a reset is a no-op.

use super::field::FieldName;
use super::stage::{FormVariant, Stage, StageTable};
use super::validation::validate_stage;
use super::values::{FormValues, ValidationErrors};
use crate::core::error::DomainError;
use crate::feedback::{FeedbackState, Sentiment};
use crate::prediction::outcome::Outcome;
use crate::prediction::request::PredictionRequest;
use crate::prediction::result::{PredictionId, PredictionReply};
use serde::Serialize;

/// Message placed in the error slot when a submission fails.
pub const SUBMIT_RETRY_MESSAGE: &str =
    "We couldn't get a prediction right now. Please try again.";

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum FormPhase {
    Editing { stage: usize },
    Submitting,
    Completed { outcome: Outcome },
}

impl FormPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormPhase::Editing { .. } => "editing",
            FormPhase::Submitting => "submitting",
            FormPhase::Completed { .. } => "completed",
        }
    }
}

/// Proof that a submission was started, tied to one session generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub generation: u64,
    pub request: PredictionRequest,
}

/// Whether a completion was applied to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The session was reset (or is no longer submitting) since the ticket
    /// was issued; nothing changed.
    Stale,
}

/// A single user's form session.
#[derive(Debug, Clone)]
pub struct FormSession {
    table: StageTable,
    values: FormValues,
    errors: ValidationErrors,
    phase: FormPhase,
    generation: u64,
    submit_error: Option<String>,
    feedback: FeedbackState,
}

impl FormSession {
    pub fn new(variant: FormVariant) -> Self {
        Self::with_table(StageTable::for_variant(variant))
    }

    pub fn with_table(table: StageTable) -> Self {
        Self {
            values: FormValues::empty_for(&table),
            table,
            errors: ValidationErrors::new(),
            phase: FormPhase::Editing { stage: 0 },
            generation: 0,
            submit_error: None,
            feedback: FeedbackState::NotGiven,
        }
    }

    // ==================== Accessors ====================

    pub fn table(&self) -> &StageTable {
        &self.table
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Message from the last failed submission, cleared on the next attempt.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn feedback(&self) -> FeedbackState {
        self.feedback
    }

    /// Stage index; the last stage while submitting or completed.
    pub fn stage_index(&self) -> usize {
        match self.phase {
            FormPhase::Editing { stage } => stage,
            _ => self.table.last_index(),
        }
    }

    pub fn current_stage(&self) -> &'static Stage {
        // stage_index is always kept within the table
        &self.table.stages()[self.stage_index()]
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, FormPhase::Editing { .. })
    }

    pub fn is_last_stage(&self) -> bool {
        self.stage_index() == self.table.last_index()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            FormPhase::Completed { outcome } => Some(outcome),
            _ => None,
        }
    }

    // ==================== Editing ====================

    /// Store a raw value for a field of this form.
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) -> Result<(), DomainError> {
        self.require_editing("edit a field")?;
        if self.values.set(name, value) {
            Ok(())
        } else {
            Err(DomainError::FieldNotInForm(name))
        }
    }

    /// Validate the current stage and move forward if it passes.
    ///
    /// Returns `Ok(false)` when validation blocked the move; the errors are
    /// then available from [`errors`](Self::errors).
    pub fn next(&mut self) -> Result<bool, DomainError> {
        let stage = self.require_editing("advance")?;
        if stage >= self.table.last_index() {
            return Err(DomainError::InvalidTransition {
                action: "advance",
                phase: "on the last stage",
            });
        }

        if !self.revalidate(stage) {
            return Ok(false);
        }
        self.phase = FormPhase::Editing { stage: stage + 1 };
        Ok(true)
    }

    /// Step back one stage without validating. No-op on the first stage.
    pub fn previous(&mut self) -> Result<(), DomainError> {
        let stage = self.require_editing("go back")?;
        if stage > 0 {
            self.phase = FormPhase::Editing { stage: stage - 1 };
        }
        Ok(())
    }

    // ==================== Submission ====================

    /// Validate the last stage and enter `Submitting`.
    ///
    /// Returns `Ok(None)` when validation failed.
    pub fn begin_submission(&mut self) -> Result<Option<SubmissionTicket>, DomainError> {
        let stage = self.require_editing("submit")?;
        if stage != self.table.last_index() {
            return Err(DomainError::InvalidTransition {
                action: "submit",
                phase: "before the last stage",
            });
        }

        if !self.revalidate(stage) {
            return Ok(None);
        }

        let request = PredictionRequest::from_values(&self.table, &self.values)?;
        self.submit_error = None;
        self.phase = FormPhase::Submitting;
        Ok(Some(SubmissionTicket {
            generation: self.generation,
            request,
        }))
    }

    /// Apply a successful response for the ticket issued at `generation`.
    ///
    /// A reply that cannot be shown leaves the session in `Submitting`; the
    /// caller is expected to follow up with [`FormSession::fail_submission`].
    pub fn complete_submission(
        &mut self,
        generation: u64,
        reply: impl Into<PredictionReply>,
    ) -> Result<Completion, DomainError> {
        if !self.owns_submission(generation) {
            return Ok(Completion::Stale);
        }
        let outcome = Outcome::route(&self.values, reply.into())?;
        self.feedback = FeedbackState::NotGiven;
        self.phase = FormPhase::Completed { outcome };
        Ok(Completion::Applied)
    }

    /// Return to the last stage after a failed submission.
    pub fn fail_submission(&mut self, generation: u64, message: impl Into<String>) -> Completion {
        if !self.owns_submission(generation) {
            return Completion::Stale;
        }
        self.submit_error = Some(message.into());
        self.phase = FormPhase::Editing {
            stage: self.table.last_index(),
        };
        Completion::Applied
    }

    // ==================== Feedback ====================

    /// Prediction id for feedback, if the response carried one.
    pub fn prediction_id(&self) -> Option<&PredictionId> {
        self.outcome().and_then(Outcome::prediction_id)
    }

    /// Mark feedback as in flight. Fails if any was already sent or pending.
    pub fn begin_feedback(&mut self, sentiment: Sentiment) -> Result<(), DomainError> {
        if self.outcome().and_then(Outcome::prediction).is_none() {
            return Err(DomainError::FeedbackUnavailable);
        }
        match self.feedback {
            FeedbackState::NotGiven => {
                self.feedback = FeedbackState::Pending(sentiment);
                Ok(())
            }
            FeedbackState::Pending(_) => Err(DomainError::FeedbackPending),
            FeedbackState::Given(_) => Err(DomainError::FeedbackAlreadyGiven),
        }
    }

    pub fn feedback_delivered(&mut self) {
        if let FeedbackState::Pending(sentiment) = self.feedback {
            self.feedback = FeedbackState::Given(sentiment);
        }
    }

    pub fn feedback_failed(&mut self) {
        if let FeedbackState::Pending(_) = self.feedback {
            self.feedback = FeedbackState::NotGiven;
        }
    }

    // ==================== Reset ====================

    /// Discard everything and return to the first stage.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors = ValidationErrors::new();
        self.submit_error = None;
        self.feedback = FeedbackState::NotGiven;
        self.phase = FormPhase::Editing { stage: 0 };
        self.generation += 1;
    }

    // ==================== Helpers ====================

    fn require_editing(&self, action: &'static str) -> Result<usize, DomainError> {
        match self.phase {
            FormPhase::Editing { stage } => Ok(stage),
            ref other => Err(DomainError::InvalidTransition {
                action,
                phase: other.as_str(),
            }),
        }
    }

    /// Replace the error map with a fresh pass over `stage`.
    fn revalidate(&mut self, stage: usize) -> bool {
        self.errors = validate_stage(&self.table.stages()[stage], &self.values);
        self.errors.is_empty()
    }

    fn owns_submission(&self, generation: u64) -> bool {
        generation == self.generation && matches!(self.phase, FormPhase::Submitting)
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(FormVariant::default())
    }
}
