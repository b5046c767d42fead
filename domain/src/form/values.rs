//! Collected field values and per-field validation errors

use super::field::FieldName;
use super::stage::StageTable;
use serde::Serialize;
use std::collections::BTreeMap;

/// Raw text entered for each field of a stage table.
///
/// Every field of the table has an entry from construction onwards; values
/// are only parsed at validation or submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<FieldName, String>,
}

impl FormValues {
    /// Empty values for every field in `table`.
    pub fn empty_for(table: &StageTable) -> Self {
        Self {
            values: table
                .fields()
                .map(|def| (def.name, String::new()))
                .collect(),
        }
    }

    /// Value for `name`, or `""` for fields outside the table.
    pub fn get(&self, name: FieldName) -> &str {
        self.values.get(&name).map(String::as_str).unwrap_or("")
    }

    /// Set a value. Returns `false` (and stores nothing) for unknown fields.
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) -> bool {
        match self.values.get_mut(&name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.values.contains_key(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }
}

/// Field name → error message for one validation pass.
///
/// Absence of a key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: FieldName, message: impl Into<String>) {
        self.errors.insert(name, message.into());
    }

    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.errors.get(&name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(name, msg)| (*name, msg.as_str()))
    }
}
