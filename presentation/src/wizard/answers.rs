//! Non-interactive run: fill the form from a JSON answers file
//!
//! The file is a JSON object of field wire names to values, e.g.
//!
//! ```json
//! { "company": "Acme", "designation": "Engineer", "currentCTC": "18",
//!   "totalYoEYears": "4", "totalYoEMonths": "0", "designationYoEYears": "1",
//!   "designationYoEMonths": "6", "performanceRating": "3",
//!   "employmentType": "fulltime" }
//! ```
//!
//! Numbers are accepted in place of strings. Stages are walked in order and
//! the first stage that fails validation stops the run.

use super::WizardError;
use crate::output::console::ConsoleFormatter;
use crate::output::tips::random_tip;
use crate::progress::reporter::SimpleProgress;
use hike_application::{
    NoProgress, PredictionGateway, SubmitPredictionError, SubmitPredictionUseCase, SubmitStatus,
};
use hike_domain::{FieldName, FormSession, FormVariant, OutputFormat, SUBMIT_RETRY_MESSAGE};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Parsed answers file
pub type Answers = BTreeMap<FieldName, String>;

/// Parse the JSON object of an answers file.
pub fn parse_answers(json: &str) -> Result<Answers, WizardError> {
    let object: Map<String, Value> = serde_json::from_str(json)?;
    object
        .into_iter()
        .map(|(key, value)| {
            let name = key
                .parse::<FieldName>()
                .map_err(|_| WizardError::UnknownAnswer(key.clone()))?;
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                _ => return Err(WizardError::AnswerNotText(key)),
            };
            Ok((name, value))
        })
        .collect()
}

/// Read and parse an answers file.
pub fn load_answers(path: &Path) -> Result<Answers, WizardError> {
    let content = std::fs::read_to_string(path).map_err(|source| WizardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_answers(&content)
}

/// Store all answers and walk the session to its last stage.
pub fn fill_session(session: &mut FormSession, answers: &Answers) -> Result<(), WizardError> {
    for (name, value) in answers {
        session.set_value(*name, value.as_str())?;
    }

    while !session.is_last_stage() {
        if !session.next()? {
            return Err(invalid_stage(session));
        }
    }
    Ok(())
}

fn invalid_stage(session: &FormSession) -> WizardError {
    WizardError::InvalidAnswers {
        stage: session.current_stage().title,
        errors: session
            .errors()
            .iter()
            .map(|(name, message)| format!("{}: {}", name, message))
            .collect(),
    }
}

/// Fills, submits and renders a form without prompting
pub struct AnswersRunner<G: PredictionGateway + 'static> {
    submit: SubmitPredictionUseCase<G>,
    variant: FormVariant,
    output: OutputFormat,
    show_progress: bool,
}

impl<G: PredictionGateway + 'static> AnswersRunner<G> {
    pub fn new(submit: SubmitPredictionUseCase<G>) -> Self {
        Self {
            submit,
            variant: FormVariant::default(),
            output: OutputFormat::default(),
            show_progress: false,
        }
    }

    pub fn with_variant(mut self, variant: FormVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Submit the answers and return the rendered outcome.
    pub async fn run(&self, answers: &Answers) -> Result<String, WizardError> {
        let mut session = FormSession::new(self.variant);
        fill_session(&mut session, answers)?;

        let status = if self.show_progress {
            self.submit
                .execute_with_progress(&mut session, &SimpleProgress)
                .await
        } else {
            self.submit
                .execute_with_progress(&mut session, &NoProgress)
                .await
        };

        match status {
            Ok(SubmitStatus::Completed) => {}
            Ok(SubmitStatus::Invalid) => return Err(invalid_stage(&session)),
            Ok(SubmitStatus::Discarded) => {
                return Err(WizardError::Submission(SUBMIT_RETRY_MESSAGE.to_string()));
            }
            Err(SubmitPredictionError::Domain(e)) => return Err(e.into()),
            Err(SubmitPredictionError::Gateway(e)) => {
                return Err(WizardError::Submission(format!(
                    "{} ({})",
                    SUBMIT_RETRY_MESSAGE, e
                )));
            }
        }

        let Some(outcome) = session.outcome() else {
            return Err(WizardError::Submission(SUBMIT_RETRY_MESSAGE.to_string()));
        };
        info!("Answers run completed");

        let tip = random_tip();
        Ok(match self.output {
            OutputFormat::Text => ConsoleFormatter::format(outcome, tip),
            OutputFormat::Json => ConsoleFormatter::format_json(outcome, tip),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hike_application::GatewayError;
    use hike_domain::{
        PredictionId, PredictionReply, PredictionRequest, PredictionResult, Sentiment,
    };
    use std::sync::{Arc, Mutex};

    const EXTENDED: &str = r#"{
        "company": "Acme",
        "designation": "Engineer",
        "currentCTC": 18,
        "totalYoEYears": "4",
        "totalYoEMonths": "0",
        "designationYoEYears": "1",
        "designationYoEMonths": "6",
        "performanceRating": "3",
        "employmentType": "fulltime"
    }"#;

    struct CannedGateway {
        answer: Result<PredictionResult, GatewayError>,
        requests: Mutex<Vec<PredictionRequest>>,
    }

    impl CannedGateway {
        fn new(answer: Result<PredictionResult, GatewayError>) -> Self {
            Self {
                answer,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PredictionGateway for CannedGateway {
        async fn predict(
            &self,
            request: &PredictionRequest,
        ) -> Result<PredictionReply, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            self.answer.clone().map(PredictionReply::from)
        }

        async fn send_feedback(
            &self,
            _id: &PredictionId,
            _sentiment: Sentiment,
        ) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    fn runner(gateway: Arc<CannedGateway>) -> AnswersRunner<CannedGateway> {
        AnswersRunner::new(SubmitPredictionUseCase::new(gateway))
    }

    #[test]
    fn test_parse_answers_accepts_numbers() {
        let answers = parse_answers(EXTENDED).unwrap();
        assert_eq!(answers[&FieldName::CurrentCtc], "18");
        assert_eq!(answers[&FieldName::EmploymentType], "fulltime");
    }

    #[test]
    fn test_parse_answers_rejects_unknown_keys() {
        let err = parse_answers(r#"{"salary": "10"}"#).unwrap_err();
        assert!(matches!(err, WizardError::UnknownAnswer(key) if key == "salary"));
    }

    #[test]
    fn test_parse_answers_rejects_nested_values() {
        let err = parse_answers(r#"{"company": ["a"]}"#).unwrap_err();
        assert!(matches!(err, WizardError::AnswerNotText(_)));
    }

    #[test]
    fn test_load_answers_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, EXTENDED).unwrap();
        assert_eq!(load_answers(&path).unwrap().len(), 9);
        assert!(matches!(
            load_answers(&dir.path().join("missing.json")),
            Err(WizardError::Io { .. })
        ));
    }

    #[test]
    fn test_fill_session_stops_at_first_invalid_stage() {
        let mut answers = parse_answers(EXTENDED).unwrap();
        answers.insert(FieldName::TotalYoeMonths, "14".to_string());

        let mut session = FormSession::new(FormVariant::Extended);
        let err = fill_session(&mut session, &answers).unwrap_err();
        match err {
            WizardError::InvalidAnswers { stage, errors } => {
                assert_eq!(stage, "Experience & Compensation");
                assert_eq!(errors, vec!["totalYoEMonths: Months should be less than 12"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fill_session_rejects_fields_from_other_variant() {
        let mut answers = parse_answers(EXTENDED).unwrap();
        answers.insert(FieldName::TotalYoe, "4".to_string());
        let mut session = FormSession::new(FormVariant::Extended);
        assert!(matches!(
            fill_session(&mut session, &answers),
            Err(WizardError::Domain(_))
        ));
    }

    #[tokio::test]
    async fn test_run_renders_json_outcome() {
        let gateway = Arc::new(CannedGateway::new(Ok(PredictionResult::new(
            true, 10.0, 20.0, 0.8,
        ))));
        let output = runner(gateway.clone())
            .with_output(OutputFormat::Json)
            .run(&parse_answers(EXTENDED).unwrap())
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["max_hike"], "20.0%");
        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests[0].get("designationYoE"), Some(&serde_json::json!("1.50")));
        assert_eq!(requests[0].get("performanceRating"), Some(&serde_json::json!(3)));
    }

    #[tokio::test]
    async fn test_run_reports_gateway_failure() {
        let gateway = Arc::new(CannedGateway::new(Err(GatewayError::Timeout)));
        let err = runner(gateway)
            .run(&parse_answers(EXTENDED).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, WizardError::Submission(message) if message.starts_with(SUBMIT_RETRY_MESSAGE)));
    }

    #[tokio::test]
    async fn test_run_classic_variant() {
        let gateway = Arc::new(CannedGateway::new(Ok(PredictionResult::new(
            false, 5.0, 8.0, 0.4,
        ))));
        let answers = parse_answers(
            r#"{"company": "Acme", "designation": "Engineer", "currentCTC": "12",
                "totalYoE": "3", "designationYoE": "1", "performanceRating": "meets"}"#,
        )
        .unwrap();
        let output = runner(gateway.clone())
            .with_variant(FormVariant::Classic)
            .run(&answers)
            .await
            .unwrap();

        assert!(output.contains("Keep up the great work!"));
        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests[0].get("performanceRating"), Some(&serde_json::json!(2)));
        assert_eq!(requests[0].get("totalYoE"), Some(&serde_json::json!("3")));
    }
}
