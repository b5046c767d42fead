//! Presentation layer for hike-predictor
//!
//! This crate contains CLI definitions, the interactive wizard, output
//! formatting and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod wizard;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, Variant};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use wizard::{AnswersRunner, HikeWizard, WizardError, load_answers};
