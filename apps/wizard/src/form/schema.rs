//! Static description of a form: its fields, their formats and choice lists,
//! and the ordered steps that group them.

use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::WizardError;

/// Format rule applied on top of the required-field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Text,
    Email,
    Mobile,
    BirthYear,
}

/// One entry of a single-choice list (radio group or picker).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Enumerated field identifier of a form.
pub trait FormField: Copy + Eq + Ord + Hash + Debug + 'static {
    /// Every field, in record order.
    const ALL: &'static [Self];

    /// Stable external name (the key used in persisted snapshots).
    fn name(self) -> &'static str;

    /// Human-readable label for prompts and the review screen.
    fn label(self) -> &'static str;

    fn format(self) -> FieldFormat {
        FieldFormat::Text
    }

    /// Allowed values when the field is a single-choice input.
    fn choices(self) -> Option<&'static [Choice]> {
        None
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Like `from_name`, but an unknown name is an error.
    fn parse_name(name: &str) -> Result<Self, WizardError> {
        Self::from_name(name).ok_or_else(|| WizardError::UnknownField(name.to_string()))
    }

    /// Label of the choice whose value matches, if any.
    fn choice_label(self, value: &str) -> Option<&'static str> {
        self.choices()?
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.label)
    }
}

/// One page of a wizard.
#[derive(Debug)]
pub struct Step<F: 'static> {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Fields shown on this page, in display order.
    pub fields: &'static [F],
    /// Subset of `fields` that must be non-blank before moving on.
    pub required_fields: &'static [F],
}

impl<F: PartialEq> Step<F> {
    pub fn requires(&self, field: &F) -> bool {
        self.required_fields.contains(field)
    }
}

/// A flat record of string fields described by a static step schema.
///
/// Every value is a string; a blank value (after trimming) means "unset".
pub trait FormRecord: Default + Clone + Debug {
    type Field: FormField;

    /// Ordered steps. Must not be empty.
    fn steps() -> &'static [Step<Self::Field>];

    fn get(&self, field: Self::Field) -> &str;

    fn set(&mut self, field: Self::Field, value: String);

    /// Total number of required fields across all steps.
    fn required_field_count() -> usize {
        Self::steps().iter().map(|s| s.required_fields.len()).sum()
    }
}
