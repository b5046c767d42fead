//! Interactive wizard: one stage at a time, then the result and feedback

use super::WizardError;
use super::input::{Entry, FeedbackAnswer, WizardCommand, resolve_choice};
use crate::output::console::ConsoleFormatter;
use crate::output::tips::random_tip;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use hike_application::{
    NoProgress, NoTelemetry, PredictionGateway, PredictionIdCache,
    ResetFormUseCase, SendFeedbackUseCase, SubmissionProgress, SubmitPredictionUseCase,
    SubmitStatus, TelemetryEvent, TelemetrySink,
};
use hike_domain::{FieldKind, FormSession, FormVariant, Outcome, OutputFormat};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Source of typed lines. `Ok(None)` means the user closed the input.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, WizardError>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, WizardError> {
        match self.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive hike wizard
pub struct HikeWizard<G: PredictionGateway + 'static> {
    submit: SubmitPredictionUseCase<G>,
    feedback: SendFeedbackUseCase<G>,
    reset: ResetFormUseCase,
    telemetry: Arc<dyn TelemetrySink>,
    variant: FormVariant,
    output: OutputFormat,
    show_progress: bool,
    fancy_progress: bool,
}

impl<G: PredictionGateway + 'static> HikeWizard<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            submit: SubmitPredictionUseCase::new(gateway.clone()),
            feedback: SendFeedbackUseCase::new(gateway),
            reset: ResetFormUseCase::new(),
            telemetry: Arc::new(NoTelemetry),
            variant: FormVariant::default(),
            output: OutputFormat::default(),
            show_progress: true,
            fancy_progress: true,
        }
    }

    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.submit = self.submit.with_telemetry(telemetry.clone());
        self.feedback = self.feedback.with_telemetry(telemetry.clone());
        self.reset = self.reset.with_telemetry(telemetry.clone());
        self.telemetry = telemetry;
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn PredictionIdCache>) -> Self {
        self.submit = self.submit.with_cache(cache.clone());
        self.feedback = self.feedback.with_cache(cache);
        self
    }

    pub fn with_variant(mut self, variant: FormVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Use plain text progress instead of a spinner
    pub fn with_simple_progress(mut self) -> Self {
        self.fancy_progress = false;
        self
    }

    /// Run the wizard on the terminal
    pub async fn run(&self) -> Result<(), WizardError> {
        let mut rl = DefaultEditor::new()?;
        self.run_with(&mut rl).await
    }

    /// Run the wizard against any line source
    pub async fn run_with(&self, reader: &mut dyn LineReader) -> Result<(), WizardError> {
        self.telemetry.record(TelemetryEvent::check_hike_clicked());
        println!("{}", ConsoleFormatter::welcome());

        let mut session = FormSession::new(self.variant);
        loop {
            let flow = if session.is_editing() {
                self.edit_stage(reader, &mut session).await?
            } else if let Some(outcome) = session.outcome().cloned() {
                self.show_outcome(reader, &mut session, &outcome).await?
            } else {
                // `Submitting` never outlives `submit`
                warn!("Unexpected session phase: {}", session.phase().as_str());
                self.reset.execute(&mut session);
                Flow::Continue
            };

            if let Flow::Quit = flow {
                println!("Bye!");
                return Ok(());
            }
        }
    }

    async fn edit_stage(
        &self,
        reader: &mut dyn LineReader,
        session: &mut FormSession,
    ) -> Result<Flow, WizardError> {
        let index = session.stage_index();
        let stage = session.current_stage();
        println!(
            "{}",
            ConsoleFormatter::stage_header(index, session.table().len(), stage.title)
        );
        if let Some(message) = session.submit_error() {
            println!("{}", ConsoleFormatter::submit_error(message));
        }

        for field in stage.fields {
            if let Some(group) = session
                .table()
                .tenure_groups()
                .find(|g| g.years == field.name)
            {
                println!("{}", ConsoleFormatter::group_heading(group.heading));
            }
            if field.kind == FieldKind::Choice {
                println!("{}", ConsoleFormatter::choice_list(field));
            }

            loop {
                if let Some(message) = session.errors().get(field.name) {
                    println!("{}", ConsoleFormatter::field_error(message));
                }
                let prompt =
                    ConsoleFormatter::field_prompt(field, session.values().get(field.name));
                let Some(line) = reader.read_line(&prompt)? else {
                    return Ok(Flow::Quit);
                };

                match Entry::parse(&line) {
                    Entry::Keep => break,
                    Entry::Value(value) => {
                        session.set_value(field.name, resolve_choice(field, &value))?;
                        break;
                    }
                    Entry::Command(WizardCommand::Help) => println!("{}", ConsoleFormatter::help()),
                    Entry::Command(WizardCommand::Back) => {
                        if index == 0 {
                            println!("Already at the first step.");
                        }
                        session.previous()?;
                        return Ok(Flow::Continue);
                    }
                    Entry::Command(WizardCommand::Reset) => {
                        self.reset.execute(session);
                        return Ok(Flow::Continue);
                    }
                    Entry::Command(WizardCommand::Quit) => return Ok(Flow::Quit),
                    Entry::UnknownCommand(cmd) => {
                        println!("Unknown command: {}", cmd);
                        println!("Type :help for available commands");
                    }
                }
            }
        }

        if session.is_last_stage() {
            self.submit_form(session).await;
        } else if !session.next()? {
            debug!("Stage {} blocked by validation", index);
        }
        Ok(Flow::Continue)
    }

    async fn submit_form(&self, session: &mut FormSession) {
        let result = if !self.show_progress {
            self.submit.execute_with_progress(session, &NoProgress).await
        } else {
            let progress: Box<dyn SubmissionProgress> = if self.fancy_progress {
                Box::new(ProgressReporter::new())
            } else {
                Box::new(SimpleProgress)
            };
            self.submit
                .execute_with_progress(session, progress.as_ref())
                .await
        };

        match result {
            Ok(SubmitStatus::Completed) | Ok(SubmitStatus::Discarded) => {}
            Ok(SubmitStatus::Invalid) => debug!("Submission blocked by validation"),
            // The session carries the retry message for the next render
            Err(e) => debug!("Submission failed: {}", e),
        }
    }

    async fn show_outcome(
        &self,
        reader: &mut dyn LineReader,
        session: &mut FormSession,
        outcome: &Outcome,
    ) -> Result<Flow, WizardError> {
        let tip = random_tip();
        match self.output {
            OutputFormat::Text => println!("{}", ConsoleFormatter::format(outcome, tip)),
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(outcome, tip)),
        }

        if outcome.prediction().is_some()
            && let Flow::Quit = self.ask_feedback(reader, session).await?
        {
            return Ok(Flow::Quit);
        }

        let prompt = match outcome {
            Outcome::Prediction(_) => "Press Enter to start a new prediction (:quit to exit): ",
            Outcome::NotApplicable { .. } => "Press Enter to reset the form (:quit to exit): ",
        };
        let Some(line) = reader.read_line(prompt)? else {
            return Ok(Flow::Quit);
        };
        if let Entry::Command(WizardCommand::Quit) = Entry::parse(&line) {
            return Ok(Flow::Quit);
        }
        self.reset.execute(session);
        Ok(Flow::Continue)
    }

    async fn ask_feedback(
        &self,
        reader: &mut dyn LineReader,
        session: &mut FormSession,
    ) -> Result<Flow, WizardError> {
        while session.feedback().accepts_feedback() {
            let Some(line) =
                reader.read_line("Was this prediction helpful? [y]es / [n]o / Enter to skip: ")?
            else {
                return Ok(Flow::Quit);
            };

            let sentiment = match FeedbackAnswer::parse(&line) {
                Some(FeedbackAnswer::Give(sentiment)) => sentiment,
                Some(FeedbackAnswer::Skip) => break,
                None => {
                    println!("Please answer y or n.");
                    continue;
                }
            };

            match self.feedback.execute(session, sentiment).await {
                Ok(()) => println!("Thanks for your feedback!"),
                Err(e) if e.is_retryable() => {
                    println!("{}", ConsoleFormatter::submit_error(&e.to_string()));
                    println!("You can try again.");
                }
                Err(e) => {
                    println!("{}", ConsoleFormatter::submit_error(&e.to_string()));
                    break;
                }
            }
        }
        Ok(Flow::Continue)
    }
}
