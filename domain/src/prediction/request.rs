//! Request payload construction
//!
//! The prediction service receives every collected value as a string under
//! its wire name, with two adjustments:
//!
//! - split year/month pairs are collapsed to decimal years under the
//!   unsplit name (`totalYoE`, `designationYoE`), two decimals
//! - `performanceRating` is sent as its integer code

use crate::core::error::DomainError;
use crate::form::field::FieldName;
use crate::form::stage::StageTable;
use crate::form::validation::parse_non_negative;
use crate::form::values::FormValues;
use serde::Serialize;
use serde_json::{Map, Value};

/// Combine a year/month pair into decimal years, rounded to two decimals.
pub fn collapse_years(years: f64, months: f64) -> f64 {
    ((years + months / 12.0) * 100.0).round() / 100.0
}

/// Wire format for decimal years: always two decimals.
pub fn format_decimal_years(value: f64) -> String {
    format!("{:.2}", value)
}

/// Integer code for a performance rating value.
///
/// Ordinal codes pass through; named levels map onto the same scale.
pub fn rating_code(raw: &str) -> Option<i64> {
    match raw.trim() {
        "outstanding" => Some(4),
        "exceeds" => Some(3),
        "meets" => Some(2),
        "needsImprovement" => Some(1),
        other => other.parse().ok(),
    }
}

/// JSON body sent to the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionRequest {
    body: Map<String, Value>,
}

impl PredictionRequest {
    /// Build the payload from validated form values.
    pub fn from_values(table: &StageTable, values: &FormValues) -> Result<Self, DomainError> {
        let mut body: Map<String, Value> = values
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), Value::String(value.to_string())))
            .collect();

        for group in table.tenure_groups() {
            let years = parse_field(values, group.years)?;
            let months = parse_field(values, group.months)?;
            let unsplit = match group.years {
                FieldName::TotalYoeYears => FieldName::TotalYoe,
                _ => FieldName::DesignationYoe,
            };
            body.insert(
                unsplit.as_str().to_string(),
                Value::String(format_decimal_years(collapse_years(years, months))),
            );
        }

        if values.contains(FieldName::PerformanceRating) {
            let raw = values.get(FieldName::PerformanceRating);
            let code = rating_code(raw).ok_or_else(|| DomainError::InvalidNumber {
                field: FieldName::PerformanceRating,
                value: raw.to_string(),
            })?;
            body.insert(
                FieldName::PerformanceRating.as_str().to_string(),
                Value::from(code),
            );
        }

        Ok(Self { body })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.body
    }
}

fn parse_field(values: &FormValues, name: FieldName) -> Result<f64, DomainError> {
    let raw = values.get(name);
    parse_non_negative(raw).ok_or_else(|| DomainError::InvalidNumber {
        field: name,
        value: raw.to_string(),
    })
}
