//! Form wizard: interactive prompts and answers-file runs

pub mod answers;
pub mod input;
pub mod repl;

pub use answers::{Answers, AnswersRunner, load_answers, parse_answers};
pub use repl::{HikeWizard, LineReader};

use hike_domain::DomainError;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a wizard or answers run
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Terminal input failed: {0}")]
    Readline(#[from] ReadlineError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Could not read answers file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Answers file is not a JSON object: {0}")]
    AnswersFormat(#[from] serde_json::Error),

    #[error("Unknown field in answers file: {0}")]
    UnknownAnswer(String),

    #[error("Answer for {0} must be a string or number")]
    AnswerNotText(String),

    #[error("Invalid answers for stage \"{stage}\": {}", .errors.join("; "))]
    InvalidAnswers {
        stage: &'static str,
        errors: Vec<String>,
    },

    #[error("{0}")]
    Submission(String),
}
