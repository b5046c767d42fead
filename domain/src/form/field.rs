//! Field identities and definitions
//!
//! Every input the wizard collects is identified by a [`FieldName`]. The
//! stage table attaches display metadata to each name through a
//! [`FieldDefinition`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of a single form input.
///
/// Serialized with the camelCase wire names the prediction service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "company")]
    Company,
    #[serde(rename = "designation")]
    Designation,
    #[serde(rename = "currentCTC")]
    CurrentCtc,
    /// Total experience as decimal years (classic form)
    #[serde(rename = "totalYoE")]
    TotalYoe,
    /// Time in current role as decimal years (classic form)
    #[serde(rename = "designationYoE")]
    DesignationYoe,
    #[serde(rename = "totalYoEYears")]
    TotalYoeYears,
    #[serde(rename = "totalYoEMonths")]
    TotalYoeMonths,
    #[serde(rename = "designationYoEYears")]
    DesignationYoeYears,
    #[serde(rename = "designationYoEMonths")]
    DesignationYoeMonths,
    #[serde(rename = "performanceRating")]
    PerformanceRating,
    #[serde(rename = "employmentType")]
    EmploymentType,
}

impl FieldName {
    pub const ALL: [FieldName; 11] = [
        FieldName::Company,
        FieldName::Designation,
        FieldName::CurrentCtc,
        FieldName::TotalYoe,
        FieldName::DesignationYoe,
        FieldName::TotalYoeYears,
        FieldName::TotalYoeMonths,
        FieldName::DesignationYoeYears,
        FieldName::DesignationYoeMonths,
        FieldName::PerformanceRating,
        FieldName::EmploymentType,
    ];

    /// Wire name used in request payloads and answers files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Company => "company",
            FieldName::Designation => "designation",
            FieldName::CurrentCtc => "currentCTC",
            FieldName::TotalYoe => "totalYoE",
            FieldName::DesignationYoe => "designationYoE",
            FieldName::TotalYoeYears => "totalYoEYears",
            FieldName::TotalYoeMonths => "totalYoEMonths",
            FieldName::DesignationYoeYears => "designationYoEYears",
            FieldName::DesignationYoeMonths => "designationYoEMonths",
            FieldName::PerformanceRating => "performanceRating",
            FieldName::EmploymentType => "employmentType",
        }
    }

    /// Short label used in validation messages.
    ///
    /// Deliberately distinct from the longer display label on
    /// [`FieldDefinition`] ("Company" vs "Company Name").
    pub fn validation_label(&self) -> &'static str {
        match self {
            FieldName::Company => "Company",
            FieldName::Designation => "Designation",
            FieldName::CurrentCtc => "Current CTC",
            FieldName::TotalYoe | FieldName::TotalYoeYears => "Total Years of Experience",
            FieldName::DesignationYoe | FieldName::DesignationYoeYears => "Years in Current Role",
            FieldName::TotalYoeMonths => "Total Experience (Months)",
            FieldName::DesignationYoeMonths => "Current Role (Months)",
            FieldName::PerformanceRating => "Performance Rating",
            FieldName::EmploymentType => "Employment Type",
        }
    }

    /// Month subfields of a split year/month pair.
    pub fn is_month_part(&self) -> bool {
        matches!(
            self,
            FieldName::TotalYoeMonths | FieldName::DesignationYoeMonths
        )
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Choice,
}

/// One selectable option of a [`FieldKind::Choice`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldChoice {
    pub value: &'static str,
    pub label: &'static str,
}

impl FieldChoice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Immutable description of a form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: FieldKind,
    pub choices: &'static [FieldChoice],
}

impl FieldDefinition {
    pub const fn text(name: FieldName, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            choices: &[],
        }
    }

    pub const fn number(name: FieldName, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
            choices: &[],
        }
    }

    pub const fn choice(
        name: FieldName,
        label: &'static str,
        choices: &'static [FieldChoice],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice,
            choices,
        }
    }

    /// Whether `value` is one of the declared choices.
    pub fn accepts_choice(&self, value: &str) -> bool {
        self.choices.iter().any(|c| c.value == value)
    }

    /// Label of the choice whose value is `value`.
    pub fn choice_label(&self, value: &str) -> Option<&'static str> {
        self.choices
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip_through_from_str() {
        for name in FieldName::ALL {
            assert_eq!(name.as_str().parse::<FieldName>().unwrap(), name);
        }
        assert!("salary".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&FieldName::CurrentCtc).unwrap();
        assert_eq!(json, "\"currentCTC\"");
    }

    #[test]
    fn test_choice_lookup() {
        const CHOICES: &[FieldChoice] = &[FieldChoice::new("a", "Alpha")];
        let def = FieldDefinition::choice(FieldName::EmploymentType, "Kind", CHOICES);
        assert!(def.accepts_choice("a"));
        assert!(!def.accepts_choice("b"));
        assert_eq!(def.choice_label("a"), Some("Alpha"));
    }
}
