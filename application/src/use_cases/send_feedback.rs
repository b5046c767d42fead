//! Send Feedback use case
//!
//! Sends a single like/dislike for the prediction currently held by the
//! session. The session's feedback state guarantees at most one request per
//! prediction: a call while one is pending, or after one succeeded, is
//! rejected before anything is sent.

use crate::ports::prediction_cache::{NoPredictionCache, PredictionIdCache};
use crate::ports::prediction_gateway::{GatewayError, PredictionGateway};
use crate::ports::telemetry::{NoTelemetry, TelemetryEvent, TelemetrySink};
use hike_domain::{DomainError, FormSession, Sentiment};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while sending feedback
#[derive(Error, Debug)]
pub enum SendFeedbackError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No prediction id available for feedback")]
    MissingPredictionId,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl SendFeedbackError {
    /// Whether the prompt should stay open for another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, SendFeedbackError::Gateway(_))
    }
}

/// Use case for sending feedback on a prediction
pub struct SendFeedbackUseCase<G: PredictionGateway + 'static> {
    gateway: Arc<G>,
    telemetry: Arc<dyn TelemetrySink>,
    cache: Arc<dyn PredictionIdCache>,
}

impl<G: PredictionGateway + 'static> SendFeedbackUseCase<G> {
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

    pub async fn execute(
        &self,
        session: &mut FormSession,
        sentiment: Sentiment,
    ) -> Result<(), SendFeedbackError> {
        session.begin_feedback(sentiment)?;

        let Some(id) = session
            .prediction_id()
            .cloned()
            .or_else(|| self.cache.load())
        else {
            warn!("Feedback dropped: no prediction id in response or cache");
            session.feedback_failed();
            return Err(SendFeedbackError::MissingPredictionId);
        };

        match self.gateway.send_feedback(&id, sentiment).await {
            Ok(()) => {
                session.feedback_delivered();
                self.telemetry
                    .record(TelemetryEvent::feedback_submitted(sentiment));
                info!("Feedback ({}) recorded for prediction {}", sentiment.as_str(), id);
                Ok(())
            }
            Err(e) => {
                warn!(
                    status = ?e.status(),
                    "Error submitting feedback for prediction {}: {}", id, e
                );
                session.feedback_failed();
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::prediction_cache::InMemoryPredictionCache;
    use crate::use_cases::test_support::{MockGateway, RecordingTelemetry, fill_valid};
    use hike_domain::{FeedbackState, FormVariant, PredictionId, PredictionResult};

    fn completed(result: PredictionResult) -> FormSession {
        let mut session = FormSession::new(FormVariant::Extended);
        fill_valid(&mut session, "fulltime");
        let ticket = session.begin_submission().unwrap().unwrap();
        session.complete_submission(ticket.generation, result).unwrap();
        session
    }

    #[tokio::test]
    async fn test_feedback_sent_once_with_result_id() {
        let gateway = Arc::new(MockGateway::default());
        let telemetry = Arc::new(RecordingTelemetry::default());
        let use_case = SendFeedbackUseCase::new(gateway.clone()).with_telemetry(telemetry.clone());
        let mut session = completed(PredictionResult::new(true, 1.0, 2.0, 0.5).with_prediction_id(11));

        use_case.execute(&mut session, Sentiment::Liked).await.unwrap();
        let second = use_case.execute(&mut session, Sentiment::Disliked).await;

        assert!(matches!(
            second,
            Err(SendFeedbackError::Domain(DomainError::FeedbackAlreadyGiven))
        ));
        assert_eq!(
            gateway.feedback_calls(),
            vec![(PredictionId::Number(11), true)]
        );
        assert_eq!(session.feedback(), FeedbackState::Given(Sentiment::Liked));
        assert_eq!(telemetry.names(), vec!["feedback_submitted"]);
    }

    #[tokio::test]
    async fn test_falls_back_to_cached_id() {
        let gateway = Arc::new(MockGateway::default());
        let cache = Arc::new(InMemoryPredictionCache::with_id(PredictionId::from("cached")));
        let use_case = SendFeedbackUseCase::new(gateway.clone()).with_cache(cache);
        let mut session = completed(PredictionResult::new(false, 1.0, 2.0, 0.5));

        use_case.execute(&mut session, Sentiment::Disliked).await.unwrap();
        assert_eq!(
            gateway.feedback_calls(),
            vec![(PredictionId::from("cached"), false)]
        );
    }

    #[tokio::test]
    async fn test_missing_id_leaves_prompt_open() {
        let gateway = Arc::new(MockGateway::default());
        let use_case = SendFeedbackUseCase::new(gateway.clone());
        let mut session = completed(PredictionResult::new(false, 1.0, 2.0, 0.5));

        let err = use_case.execute(&mut session, Sentiment::Liked).await.unwrap_err();
        assert!(matches!(err, SendFeedbackError::MissingPredictionId));
        assert!(gateway.feedback_calls().is_empty());
        assert_eq!(session.feedback(), FeedbackState::NotGiven);
    }

    #[tokio::test]
    async fn test_gateway_failure_allows_retry() {
        let gateway = Arc::new(MockGateway::failing(GatewayError::Timeout));
        let use_case = SendFeedbackUseCase::new(gateway.clone());
        let mut session = completed(PredictionResult::new(true, 1.0, 2.0, 0.5).with_prediction_id(1));

        let err = use_case.execute(&mut session, Sentiment::Liked).await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(session.feedback(), FeedbackState::NotGiven);

        // The retry reaches the gateway again
        let _ = use_case.execute(&mut session, Sentiment::Liked).await;
        assert_eq!(gateway.feedback_calls().len(), 2);
    }

    #[tokio::test]
    async fn test_no_feedback_before_a_prediction() {
        let gateway = Arc::new(MockGateway::default());
        let use_case = SendFeedbackUseCase::new(gateway.clone());
        let mut session = FormSession::default();

        let err = use_case.execute(&mut session, Sentiment::Liked).await.unwrap_err();
        assert!(matches!(
            err,
            SendFeedbackError::Domain(DomainError::FeedbackUnavailable)
        ));
        assert!(gateway.feedback_calls().is_empty());
    }
}
