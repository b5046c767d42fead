//! Submit Prediction use case
//!
//! Validates the last stage, sends the profile to the prediction service and
//! records the outcome on the session.

use crate::ports::prediction_cache::{NoPredictionCache, PredictionIdCache};
use crate::ports::prediction_gateway::{GatewayError, PredictionGateway};
use crate::ports::progress::{NoProgress, SubmissionProgress};
use crate::ports::telemetry::{NoTelemetry, TelemetryEvent, TelemetrySink};
use hike_domain::{Completion, DomainError, FormSession, SUBMIT_RETRY_MESSAGE};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while submitting
#[derive(Error, Debug)]
pub enum SubmitPredictionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// What happened to a submit request that did not error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The last stage failed validation; nothing was sent
    Invalid,
    /// The session now holds an outcome
    Completed,
    /// The session was reset while the request was in flight
    Discarded,
}

/// Use case for submitting a completed form
pub struct SubmitPredictionUseCase<G: PredictionGateway + 'static> {
    gateway: Arc<G>,
    telemetry: Arc<dyn TelemetrySink>,
    cache: Arc<dyn PredictionIdCache>,
}

impl<G: PredictionGateway + 'static> SubmitPredictionUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            telemetry: Arc::new(NoTelemetry),
            cache: Arc::new(NoPredictionCache),
        }
    }

    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn PredictionIdCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        session: &mut FormSession,
    ) -> Result<SubmitStatus, SubmitPredictionError> {
        self.execute_with_progress(session, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// A gateway failure puts the session back on the last stage with
    /// [`SUBMIT_RETRY_MESSAGE`] in its error slot and is returned as `Err`.
    pub async fn execute_with_progress(
        &self,
        session: &mut FormSession,
        progress: &dyn SubmissionProgress,
    ) -> Result<SubmitStatus, SubmitPredictionError> {
        let Some(ticket) = session.begin_submission()? else {
            debug!(
                "Submission blocked by {} validation error(s)",
                session.errors().len()
            );
            return Ok(SubmitStatus::Invalid);
        };

        self.telemetry.record(TelemetryEvent::predict_clicked());
        debug!("Prediction request: {:?}", ticket.request.as_json());

        progress.on_submit_start();
        let completion = match self.gateway.predict(&ticket.request).await {
            Ok(reply) => session
                .complete_submission(ticket.generation, reply)
                .map_err(|e| GatewayError::MalformedResponse(e.to_string())),
            Err(e) => Err(e),
        };
        progress.on_submit_finish(completion.is_ok());

        match completion {
            Ok(Completion::Applied) => {
                if let Some(id) = session.prediction_id() {
                    self.cache.store(id);
                }
                info!("Prediction received");
                Ok(SubmitStatus::Completed)
            }
            Ok(Completion::Stale) => {
                debug!("Discarding prediction for a reset session");
                Ok(SubmitStatus::Discarded)
            }
            Err(e) => {
                warn!(status = ?e.status(), "Prediction request failed: {}", e);
                match session.fail_submission(ticket.generation, SUBMIT_RETRY_MESSAGE) {
                    Completion::Applied => Err(e.into()),
                    Completion::Stale => Ok(SubmitStatus::Discarded),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::prediction_cache::InMemoryPredictionCache;
    use crate::use_cases::test_support::{MockGateway, RecordingTelemetry, fill_valid};
    use hike_domain::{
        FieldName, FormPhase, FormVariant, Outcome, PredictionId, PredictionReply, PredictionResult,
    };

    fn ready_session(employment: &str) -> FormSession {
        let mut session = FormSession::new(FormVariant::Extended);
        fill_valid(&mut session, employment);
        session
    }

    #[tokio::test]
    async fn test_successful_submission_completes_session() {
        let gateway = Arc::new(MockGateway::answering(
            PredictionResult::new(true, 10.0, 20.0, 0.8).with_prediction_id(5),
        ));
        let cache = Arc::new(InMemoryPredictionCache::new());
        let telemetry = Arc::new(RecordingTelemetry::default());
        let use_case = SubmitPredictionUseCase::new(gateway.clone())
            .with_cache(cache.clone())
            .with_telemetry(telemetry.clone());

        let mut session = ready_session("fulltime");
        let status = use_case.execute(&mut session).await.unwrap();

        assert_eq!(status, SubmitStatus::Completed);
        assert!(session.outcome().unwrap().prediction().is_some());
        assert_eq!(gateway.predict_calls(), 1);
        assert_eq!(cache.load(), Some(PredictionId::Number(5)));
        assert_eq!(telemetry.names(), vec!["predict_button_click"]);

        let sent = gateway.last_request().unwrap();
        assert_eq!(sent.get("totalYoE"), Some(&serde_json::json!("5.50")));
        assert_eq!(sent.get("performanceRating"), Some(&serde_json::json!(4)));
    }

    #[tokio::test]
    async fn test_invalid_stage_sends_nothing() {
        let gateway = Arc::new(MockGateway::answering(PredictionResult::new(
            true, 1.0, 2.0, 0.5,
        )));
        let telemetry = Arc::new(RecordingTelemetry::default());
        let use_case =
            SubmitPredictionUseCase::new(gateway.clone()).with_telemetry(telemetry.clone());

        let mut session = ready_session("fulltime");
        session.set_value(FieldName::PerformanceRating, "").unwrap();

        let status = use_case.execute(&mut session).await.unwrap();
        assert_eq!(status, SubmitStatus::Invalid);
        assert_eq!(gateway.predict_calls(), 0);
        assert!(telemetry.names().is_empty());
        assert!(session.errors().get(FieldName::PerformanceRating).is_some());
    }

    #[tokio::test]
    async fn test_gateway_failure_returns_to_last_stage_with_message() {
        let gateway = Arc::new(MockGateway::failing(GatewayError::Status {
            status: 500,
            body: "boom".to_string(),
        }));
        let use_case = SubmitPredictionUseCase::new(gateway);

        let mut session = ready_session("fulltime");
        let err = use_case.execute(&mut session).await.unwrap_err();

        assert!(matches!(err, SubmitPredictionError::Gateway(_)));
        assert_eq!(session.phase(), &FormPhase::Editing { stage: 2 });
        assert_eq!(session.submit_error(), Some(SUBMIT_RETRY_MESSAGE));
    }

    #[tokio::test]
    async fn test_malformed_response_is_a_gateway_error() {
        let gateway = Arc::new(MockGateway::answering(PredictionResult::new(
            true, 10.0, 20.0, 4.0,
        )));
        let use_case = SubmitPredictionUseCase::new(gateway);

        let mut session = ready_session("fulltime");
        let err = use_case.execute(&mut session).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitPredictionError::Gateway(GatewayError::MalformedResponse(_))
        ));
        assert!(session.outcome().is_none());
    }

    #[tokio::test]
    async fn test_intern_gets_not_applicable_outcome() {
        let gateway = Arc::new(MockGateway::answering(PredictionResult::new(
            true, 10.0, 20.0, 0.8,
        )));
        let use_case = SubmitPredictionUseCase::new(gateway);

        let mut session = ready_session("intern");
        use_case.execute(&mut session).await.unwrap();
        assert!(session.outcome().unwrap().prediction().is_none());
    }

    #[tokio::test]
    async fn test_intern_outcome_does_not_depend_on_reply_shape() {
        let gateway = Arc::new(MockGateway::replying(PredictionReply::new(
            serde_json::json!({"status": "ok"}),
        )));
        let cache = Arc::new(InMemoryPredictionCache::new());
        let use_case = SubmitPredictionUseCase::new(gateway).with_cache(cache.clone());

        let mut session = ready_session("intern");
        let status = use_case.execute(&mut session).await.unwrap();

        assert_eq!(status, SubmitStatus::Completed);
        assert!(matches!(
            session.outcome(),
            Some(Outcome::NotApplicable { .. })
        ));
        assert_eq!(session.submit_error(), None);
        assert_eq!(cache.load(), None);
    }

    #[tokio::test]
    async fn test_submit_outside_last_stage_is_domain_error() {
        let gateway = Arc::new(MockGateway::answering(PredictionResult::new(
            true, 1.0, 2.0, 0.5,
        )));
        let use_case = SubmitPredictionUseCase::new(gateway.clone());

        let mut session = FormSession::default();
        let err = use_case.execute(&mut session).await.unwrap_err();
        assert!(matches!(err, SubmitPredictionError::Domain(_)));
        assert_eq!(gateway.predict_calls(), 0);
    }
}
