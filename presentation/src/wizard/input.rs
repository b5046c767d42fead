//! Interpretation of a single line typed into the wizard

use hike_domain::{FieldDefinition, FieldKind, Sentiment};

/// Commands available at any field prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardCommand {
    Back,
    Reset,
    Quit,
    Help,
}

/// What a line typed at a field prompt means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Command(WizardCommand),
    UnknownCommand(String),
    /// Empty line: keep the current value
    Keep,
    Value(String),
}

impl Entry {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Entry::Keep;
        }
        let Some(command) = line.strip_prefix(':') else {
            return Entry::Value(line.to_string());
        };
        match command.to_ascii_lowercase().as_str() {
            "back" | "b" => Entry::Command(WizardCommand::Back),
            "reset" | "r" => Entry::Command(WizardCommand::Reset),
            "quit" | "exit" | "q" => Entry::Command(WizardCommand::Quit),
            "help" | "h" | "?" => Entry::Command(WizardCommand::Help),
            _ => Entry::UnknownCommand(line.to_string()),
        }
    }
}

/// Map user input for a choice field onto a choice value.
///
/// Accepts a 1-based option number, the value itself, or its label (both
/// case-insensitive). Anything else is passed through so validation can
/// report it.
pub fn resolve_choice(field: &FieldDefinition, input: &str) -> String {
    if field.kind != FieldKind::Choice {
        return input.to_string();
    }
    let input = input.trim();

    if let Ok(n) = input.parse::<usize>()
        && let Some(choice) = n.checked_sub(1).and_then(|i| field.choices.get(i))
    {
        return choice.value.to_string();
    }

    field
        .choices
        .iter()
        .find(|c| c.value.eq_ignore_ascii_case(input) || c.label.eq_ignore_ascii_case(input))
        .map(|c| c.value.to_string())
        .unwrap_or_else(|| input.to_string())
}

/// Answer to the feedback prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAnswer {
    Give(Sentiment),
    Skip,
}

impl FeedbackAnswer {
    /// `None` when the line is not a recognizable answer.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "s" | "skip" => Some(FeedbackAnswer::Skip),
            "y" | "yes" | "like" | "+" => Some(FeedbackAnswer::Give(Sentiment::Liked)),
            "n" | "no" | "dislike" | "-" => Some(FeedbackAnswer::Give(Sentiment::Disliked)),
            _ => None,
        }
    }
}
