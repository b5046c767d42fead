//! Stage definition table
//!
//! The wizard walks a fixed, ordered list of stages. Two layouts exist:
//!
//! | Variant    | Tenure input            | Rating values          | Employment type |
//! |------------|-------------------------|------------------------|-----------------|
//! | `Classic`  | decimal years           | named levels           | no              |
//! | `Extended` | years + months subfields | ordinal codes `4`..`1` | yes             |

use super::field::{FieldChoice, FieldDefinition, FieldName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which stage layout the session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    Classic,
    #[default]
    Extended,
}

impl FormVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormVariant::Classic => "classic",
            FormVariant::Extended => "extended",
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(FormVariant::Classic),
            "extended" => Ok(FormVariant::Extended),
            other => Err(format!("Unknown form variant: {}", other)),
        }
    }
}

/// One screen of grouped fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub title: &'static str,
    pub fields: &'static [FieldDefinition],
}

/// Display grouping for a split year/month pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenureGroup {
    pub heading: &'static str,
    pub years: FieldName,
    pub months: FieldName,
}

pub const TENURE_GROUPS: [TenureGroup; 2] = [
    TenureGroup {
        heading: "Total Years of Experience",
        years: FieldName::TotalYoeYears,
        months: FieldName::TotalYoeMonths,
    },
    TenureGroup {
        heading: "Years in Current Role",
        years: FieldName::DesignationYoeYears,
        months: FieldName::DesignationYoeMonths,
    },
];

const NAMED_RATINGS: &[FieldChoice] = &[
    FieldChoice::new("outstanding", "Outstanding"),
    FieldChoice::new("exceeds", "Exceeds Expectations"),
    FieldChoice::new("meets", "Meets Expectations"),
    FieldChoice::new("needsImprovement", "Needs Improvement"),
];

const CODED_RATINGS: &[FieldChoice] = &[
    FieldChoice::new("4", "Outstanding"),
    FieldChoice::new("3", "Exceeds Expectations"),
    FieldChoice::new("2", "Meets Expectations"),
    FieldChoice::new("1", "Needs Improvement"),
];

const EMPLOYMENT_TYPES: &[FieldChoice] = &[
    FieldChoice::new("fulltime", "Fulltime"),
    FieldChoice::new("intern", "Intern"),
];

const COMPANY_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text(FieldName::Company, "Company Name"),
    FieldDefinition::text(FieldName::Designation, "Current Designation"),
];

const CLASSIC_STAGES: &[Stage] = &[
    Stage {
        title: "Company Details",
        fields: COMPANY_FIELDS,
    },
    Stage {
        title: "Experience & Compensation",
        fields: &[
            FieldDefinition::number(FieldName::CurrentCtc, "Current CTC (in lakhs)"),
            FieldDefinition::number(FieldName::TotalYoe, "Total Years of Experience"),
            FieldDefinition::number(FieldName::DesignationYoe, "Years in Current Role"),
        ],
    },
    Stage {
        title: "Performance",
        fields: &[FieldDefinition::choice(
            FieldName::PerformanceRating,
            "Annual Performance Rating",
            NAMED_RATINGS,
        )],
    },
];

const EXTENDED_STAGES: &[Stage] = &[
    Stage {
        title: "Company Details",
        fields: COMPANY_FIELDS,
    },
    Stage {
        title: "Experience & Compensation",
        fields: &[
            FieldDefinition::number(FieldName::CurrentCtc, "Current CTC (in lakhs)"),
            FieldDefinition::number(
                FieldName::TotalYoeYears,
                "Total Years of Experience (Years)",
            ),
            FieldDefinition::number(
                FieldName::TotalYoeMonths,
                "Total Years of Experience (Months)",
            ),
            FieldDefinition::number(
                FieldName::DesignationYoeYears,
                "Years in Current Role (Years)",
            ),
            FieldDefinition::number(
                FieldName::DesignationYoeMonths,
                "Years in Current Role (Months)",
            ),
        ],
    },
    Stage {
        title: "Performance",
        fields: &[
            FieldDefinition::choice(
                FieldName::PerformanceRating,
                "Annual Performance Rating",
                CODED_RATINGS,
            ),
            FieldDefinition::choice(
                FieldName::EmploymentType,
                "Employment Type",
                EMPLOYMENT_TYPES,
            ),
        ],
    },
];

/// Ordered, immutable list of stages for one [`FormVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTable {
    variant: FormVariant,
    stages: &'static [Stage],
}

impl StageTable {
    pub fn for_variant(variant: FormVariant) -> Self {
        let stages = match variant {
            FormVariant::Classic => CLASSIC_STAGES,
            FormVariant::Extended => EXTENDED_STAGES,
        };
        Self { variant, stages }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn stages(&self) -> &'static [Stage] {
        self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.stages.len().saturating_sub(1)
    }

    pub fn stage(&self, index: usize) -> Option<&'static Stage> {
        self.stages.get(index)
    }

    /// All fields across all stages, in traversal order.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDefinition> {
        self.stages.iter().flat_map(|stage| stage.fields.iter())
    }

    pub fn field(&self, name: FieldName) -> Option<&'static FieldDefinition> {
        self.fields().find(|def| def.name == name)
    }

    /// Split year/month pairs present in this table.
    pub fn tenure_groups(&self) -> impl Iterator<Item = &'static TenureGroup> + '_ {
        TENURE_GROUPS
            .iter()
            .filter(|group| self.field(group.years).is_some())
    }
}

impl Default for StageTable {
    fn default() -> Self {
        Self::for_variant(FormVariant::default())
    }
}
