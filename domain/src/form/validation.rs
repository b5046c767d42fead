//! Field validation rules
//!
//! Rules are applied in a fixed order and the first failing rule wins, so
//! each field yields at most one message:
//!
//! 1. required (trimmed value empty)
//! 2. numeric parse / non-negative
//! 3. domain bounds (CTC, total experience, month subfields)
//! 4. minimum length for free text
//! 5. membership in the declared choices

use super::field::{FieldDefinition, FieldKind, FieldName};
use super::stage::Stage;
use super::values::{FormValues, ValidationErrors};

/// CTC above this (in lakhs) is rejected as implausible.
pub const MAX_CTC_LAKHS: f64 = 100.0;

/// Total experience above this many years is rejected as implausible.
pub const MAX_TOTAL_YEARS: f64 = 50.0;

/// Month subfields must be strictly below this.
pub const MONTHS_PER_YEAR: f64 = 12.0;

const MIN_TEXT_LEN: usize = 2;

/// Validate one field's raw value. `None` means valid.
pub fn validate_field(field: &FieldDefinition, raw: &str) -> Option<String> {
    let label = field.name.validation_label();

    if raw.trim().is_empty() {
        return Some(format!("{} is required", label));
    }

    match field.kind {
        FieldKind::Number => validate_number(field.name, raw),
        FieldKind::Text => {
            if raw.trim().chars().count() < MIN_TEXT_LEN {
                Some(too_short_message(field.name))
            } else {
                None
            }
        }
        FieldKind::Choice => {
            if field.accepts_choice(raw) {
                None
            } else {
                Some(format!("Please select a valid {}", label.to_lowercase()))
            }
        }
    }
}

/// Validate every field of `stage`, producing a fresh error map.
///
/// Errors from earlier passes are never carried over.
pub fn validate_stage(stage: &Stage, values: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in stage.fields {
        if let Some(message) = validate_field(field, values.get(field.name)) {
            errors.insert(field.name, message);
        }
    }
    errors
}

/// Parse a numeric field the way validation does: trimmed, finite, >= 0.
pub fn parse_non_negative(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
}

fn validate_number(name: FieldName, raw: &str) -> Option<String> {
    let Some(num) = parse_non_negative(raw) else {
        return Some(format!("Invalid {}", name.validation_label()));
    };

    match name {
        FieldName::CurrentCtc if num > MAX_CTC_LAKHS => {
            Some("CTC seems unusually high".to_string())
        }
        FieldName::TotalYoe | FieldName::TotalYoeYears if num > MAX_TOTAL_YEARS => {
            Some("Years of experience seems unusually high".to_string())
        }
        n if n.is_month_part() && num >= MONTHS_PER_YEAR => {
            Some("Months should be less than 12".to_string())
        }
        _ => None,
    }
}

fn too_short_message(name: FieldName) -> String {
    match name {
        FieldName::Company => "Company name is too short".to_string(),
        other => format!("{} is too short", other.validation_label()),
    }
}
