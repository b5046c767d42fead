//! Console output for the wizard and its results

use colored::Colorize;
use hike_domain::{
    FieldDefinition, FieldKind, NotApplicableReason, Outcome, PredictionResult, PredictionSummary,
};
use serde::Serialize;

pub const INTERN_HEADLINE: &str = "Interns must first secure a PPO";
pub const INTERN_GUIDANCE: &str =
    "Please work towards obtaining a Pre-Placement Offer (PPO) before proceeding further.";

/// JSON document for `--output json`
#[derive(Debug, Serialize)]
pub struct OutcomeReport<'a> {
    pub outcome: &'a Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PredictionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<&'a str>,
}

/// Formats wizard screens and outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome() -> String {
        let mut output = Self::header("Welcome to the Hike Calculator");
        output.push_str(&format!(
            "\n{}\n",
            "Answer a few questions to forecast your promotion odds and hike range.".dimmed()
        ));
        output.push_str(&format!(
            "{}\n",
            "Type :help for commands, :back to revisit a step, :quit to exit.".dimmed()
        ));
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", "Commands:".cyan().bold()));
        output.push_str("  :back    - Go to the previous step\n");
        output.push_str("  :reset   - Clear the form and start over\n");
        output.push_str("  :help    - Show this help\n");
        output.push_str("  :quit    - Exit\n");
        output.push_str("  <Enter>  - Keep the current value\n");
        output
    }

    /// `Step 2 of 3: Experience & Compensation` with a progress track
    pub fn stage_header(index: usize, total: usize, title: &str) -> String {
        let track: String = (0..total)
            .map(|i| if i <= index { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join("─");
        format!(
            "\n{}  {}\n{}\n",
            format!("Step {} of {}:", index + 1, total).cyan().bold(),
            title.bold(),
            track.cyan()
        )
    }

    pub fn group_heading(heading: &str) -> String {
        format!("{}", heading.yellow().bold())
    }

    /// Numbered options of a choice field
    pub fn choice_list(field: &FieldDefinition) -> String {
        field
            .choices
            .iter()
            .enumerate()
            .map(|(i, choice)| format!("  {}) {}", i + 1, choice.label))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Prompt text for one field; shows the current value, if any
    ///
    /// Choice prompts name the option-number range, since a number typed
    /// there picks from the list even when choice values are numeric codes.
    pub fn field_prompt(field: &FieldDefinition, current: &str) -> String {
        let (label, shown) = match field.kind {
            FieldKind::Choice => (
                format!("{} (pick 1-{})", field.label, field.choices.len()),
                field.choice_label(current).unwrap_or(current),
            ),
            FieldKind::Text | FieldKind::Number => (field.label.to_string(), current),
        };
        if shown.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, shown)
        }
    }

    pub fn field_error(message: &str) -> String {
        format!("  {} {}", "x".red(), message.red())
    }

    pub fn submit_error(message: &str) -> String {
        format!("{} {}", "!".red().bold(), message.red())
    }

    /// Full outcome card
    pub fn format(outcome: &Outcome, tip: &str) -> String {
        match outcome {
            Outcome::Prediction(result) => Self::format_prediction(result, tip),
            Outcome::NotApplicable { reason } => Self::format_not_applicable(*reason),
        }
    }

    pub fn format_prediction(result: &PredictionResult, tip: &str) -> String {
        let summary = PredictionSummary::from(result);
        let mut output = Self::header("Your Results");
        output.push('\n');

        let headline = if summary.promotion_likely {
            summary.headline.green().bold()
        } else {
            summary.headline.yellow().bold()
        };
        output.push_str(&format!("\n{}\n", headline));
        output.push_str(&format!(
            "{} {}\n",
            "Confidence Score:".dimmed(),
            summary.confidence
        ));

        output.push_str(&Self::section_header("Expected Hike Range"));
        output.push_str(&format!(
            "  {} {}    {} {}\n",
            "Minimum:".cyan(),
            summary.min_hike.green().bold(),
            "Maximum:".cyan(),
            summary.max_hike.green().bold()
        ));

        output.push_str(&format!("\n{} {}\n", "Tip:".blue().bold(), tip));
        output.push_str(&Self::footer());
        output
    }

    pub fn format_not_applicable(reason: NotApplicableReason) -> String {
        match reason {
            NotApplicableReason::Intern => {
                let mut output = Self::header(INTERN_HEADLINE);
                output.push_str(&format!("\n\n{}\n", INTERN_GUIDANCE));
                output.push_str(&Self::footer());
                output
            }
        }
    }

    pub fn report<'a>(outcome: &'a Outcome, tip: &'a str) -> OutcomeReport<'a> {
        match outcome {
            Outcome::Prediction(result) => OutcomeReport {
                outcome,
                summary: Some(PredictionSummary::from(result)),
                message: None,
                tip: Some(tip),
            },
            Outcome::NotApplicable {
                reason: NotApplicableReason::Intern,
            } => OutcomeReport {
                outcome,
                summary: None,
                message: Some(INTERN_HEADLINE),
                tip: None,
            },
        }
    }

    /// Format as JSON
    pub fn format_json(outcome: &Outcome, tip: &str) -> String {
        serde_json::to_string_pretty(&Self::report(outcome, tip))
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
