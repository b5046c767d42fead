//! Use cases (application services)

pub mod reset_form;
pub mod send_feedback;
pub mod submit_prediction;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::ports::prediction_gateway::{GatewayError, PredictionGateway};
    use crate::ports::telemetry::{TelemetryEvent, TelemetrySink};
    use async_trait::async_trait;
    use hike_domain::{
        FieldName, FormSession, PredictionId, PredictionReply, PredictionRequest, PredictionResult,
        Sentiment,
    };
    use std::sync::Mutex;

    /// Gateway returning a canned answer and recording every call.
    #[derive(Default)]
    pub struct MockGateway {
        answer: Option<PredictionReply>,
        error: Option<GatewayError>,
        requests: Mutex<Vec<PredictionRequest>>,
        feedback: Mutex<Vec<(PredictionId, bool)>>,
    }

    impl MockGateway {
        pub fn answering(result: PredictionResult) -> Self {
            Self::replying(result.into())
        }

        pub fn replying(reply: PredictionReply) -> Self {
            Self {
                answer: Some(reply),
                ..Default::default()
            }
        }

        pub fn failing(error: GatewayError) -> Self {
            Self {
                error: Some(error),
                ..Default::default()
            }
        }

        pub fn predict_calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn last_request(&self) -> Option<PredictionRequest> {
            self.requests.lock().unwrap().last().cloned()
        }

        pub fn feedback_calls(&self) -> Vec<(PredictionId, bool)> {
            self.feedback.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PredictionGateway for MockGateway {
        async fn predict(
            &self,
            request: &PredictionRequest,
        ) -> Result<PredictionReply, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            match (&self.error, &self.answer) {
                (Some(e), _) => Err(e.clone()),
                (None, Some(reply)) => Ok(reply.clone()),
                (None, None) => Err(GatewayError::Other("no answer configured".to_string())),
            }
        }

        async fn send_feedback(
            &self,
            id: &PredictionId,
            sentiment: Sentiment,
        ) -> Result<(), GatewayError> {
            self.feedback
                .lock()
                .unwrap()
                .push((id.clone(), sentiment.is_liked()));
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    pub struct RecordingTelemetry {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetry {
        pub fn names(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(|e| e.name).collect()
        }
    }

    impl TelemetrySink for RecordingTelemetry {
        fn record(&self, event: TelemetryEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    /// Fill an extended session with valid values and move to the last stage.
    pub fn fill_valid(session: &mut FormSession, employment: &str) {
        session.set_value(FieldName::Company, "Acme Corp").unwrap();
        session.set_value(FieldName::Designation, "Engineer").unwrap();
        assert!(session.next().unwrap());
        session.set_value(FieldName::CurrentCtc, "20").unwrap();
        session.set_value(FieldName::TotalYoeYears, "5").unwrap();
        session.set_value(FieldName::TotalYoeMonths, "6").unwrap();
        session.set_value(FieldName::DesignationYoeYears, "1").unwrap();
        session.set_value(FieldName::DesignationYoeMonths, "0").unwrap();
        assert!(session.next().unwrap());
        session.set_value(FieldName::PerformanceRating, "4").unwrap();
        session
            .set_value(FieldName::EmploymentType, employment)
            .unwrap();
    }
}
