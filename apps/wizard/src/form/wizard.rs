//! Wizard — one form state container and step navigator for every form.
//!
//! Holds the record being edited, the current step index, the per-field error
//! map and the set of touched (blurred at least once) fields. All mutation goes
//! through `update`, `blur`, `select`, `hydrate`, `advance` and `retreat`.
//!
//! Invariant: `0 <= current_step < R::steps().len()`.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::errors::WizardError;
use crate::form::schema::{FormField, FormRecord, Step};
use crate::form::validation::{validate, FieldError};

/// Result of a forward-navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance<F> {
    /// Moved to step `to`; the presentation layer should scroll back to the top.
    Moved { to: usize },
    /// Already on the last step and every required field is valid: ready to submit.
    Complete,
    /// Stayed put; these required fields of the current step are invalid.
    Blocked { invalid: Vec<F> },
}

/// Step indicator entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepState {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
    pub completed: bool,
}

/// One row of the final review screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Wizard<R: FormRecord> {
    record: R,
    current_step: usize,
    errors: BTreeMap<R::Field, FieldError>,
    touched: BTreeSet<R::Field>,
}

impl<R: FormRecord> Default for Wizard<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FormRecord> Wizard<R> {
    /// A wizard on step 0 with a blank record.
    pub fn new() -> Self {
        Self::with_record(R::default())
    }

    pub fn with_record(record: R) -> Self {
        Self {
            record,
            current_step: 0,
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
        }
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn steps(&self) -> &'static [Step<R::Field>] {
        R::steps()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step(&self) -> &'static Step<R::Field> {
        &R::steps()[self.current_step]
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == R::steps().len()
    }

    /// Whether `field` is required on the current step.
    pub fn is_required(&self, field: R::Field) -> bool {
        self.step().requires(&field)
    }

    // ── field events ───────────────────────────────────────────────────────

    /// Overwrites a field. Its error is refreshed only if it was already touched.
    pub fn update(&mut self, field: R::Field, value: impl Into<String>) {
        self.record.set(field, value.into());
        if self.touched.contains(&field) {
            self.refresh_error(field);
        }
    }

    /// `update` keyed by the external field name.
    pub fn update_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), WizardError> {
        let field = R::Field::parse_name(name)?;
        self.update(field, value);
        Ok(())
    }

    /// Marks a field touched and recomputes its error.
    pub fn blur(&mut self, field: R::Field) {
        self.touched.insert(field);
        self.refresh_error(field);
    }

    /// Picks a value for a single-choice field: change followed by blur.
    ///
    /// Values outside the field's choice list are rejected and nothing changes.
    pub fn select(&mut self, field: R::Field, value: &str) -> Result<(), WizardError> {
        if let Some(choices) = field.choices() {
            if !choices.iter().any(|c| c.value == value) {
                return Err(WizardError::InvalidChoice {
                    field: field.name().to_string(),
                    value: value.to_string(),
                });
            }
        }
        self.update(field, value);
        self.blur(field);
        Ok(())
    }

    /// Replaces the whole record with a previously saved snapshot.
    pub fn hydrate(&mut self, snapshot: R) {
        self.record = snapshot;
    }

    fn refresh_error(&mut self, field: R::Field) {
        let required = self.is_required(field);
        match validate(field.format(), self.record.get(field), required) {
            Some(err) => {
                self.errors.insert(field, err);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    // ── errors ─────────────────────────────────────────────────────────────

    pub fn error(&self, field: R::Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// The stored error as display text; empty when there is none.
    pub fn error_message(&self, field: R::Field) -> String {
        self.error(field).map(|e| e.to_string()).unwrap_or_default()
    }

    /// Error to show inline: only for touched fields.
    pub fn visible_error(&self, field: R::Field) -> Option<FieldError> {
        if self.touched.contains(&field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = (R::Field, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    pub fn is_touched(&self, field: R::Field) -> bool {
        self.touched.contains(&field)
    }

    // ── navigation ─────────────────────────────────────────────────────────

    /// Percentage (0–100) of required fields, across all steps, that are filled.
    pub fn progress(&self) -> f64 {
        let total = R::required_field_count();
        if total == 0 {
            return 0.0;
        }
        let filled = R::steps()
            .iter()
            .flat_map(|s| s.required_fields.iter())
            .filter(|&&f| !self.record.get(f).trim().is_empty())
            .count();
        filled as f64 / total as f64 * 100.0
    }

    /// True iff every required field of the current step is non-blank.
    pub fn can_advance(&self) -> bool {
        self.step()
            .required_fields
            .iter()
            .all(|&f| !self.record.get(f).trim().is_empty())
    }

    /// Validates every required field of the current step and moves forward
    /// if all pass.
    ///
    /// The error map is replaced by exactly the failing fields and the touched
    /// set by exactly the checked fields. On the last step a passing check
    /// yields `Advance::Complete` without moving.
    pub fn advance(&mut self) -> Advance<R::Field> {
        let step = self.step();
        let mut errors = BTreeMap::new();
        self.touched = step.required_fields.iter().copied().collect();
        for &field in step.required_fields {
            if let Some(err) = validate(field.format(), self.record.get(field), true) {
                errors.insert(field, err);
            }
        }
        self.errors = errors;

        if !self.errors.is_empty() {
            let invalid: Vec<_> = self.errors.keys().copied().collect();
            debug!(step = step.id, ?invalid, "advance blocked");
            return Advance::Blocked { invalid };
        }
        if self.is_last_step() {
            return Advance::Complete;
        }

        self.current_step += 1;
        debug!(from = step.id, to = self.step().id, "advanced");
        Advance::Moved {
            to: self.current_step,
        }
    }

    /// Steps back without validating. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.current_step == 0 {
            return false;
        }
        self.current_step -= 1;
        debug!(to = self.step().id, "retreated");
        true
    }

    pub fn step_states(&self) -> Vec<StepState> {
        R::steps()
            .iter()
            .enumerate()
            .map(|(i, s)| StepState {
                id: s.id,
                label: s.label,
                icon: s.icon,
                active: i == self.current_step,
                completed: i < self.current_step,
            })
            .collect()
    }

    /// Non-blank fields in record order, for the final review.
    /// Choice values are shown by their label.
    pub fn preview(&self) -> Vec<PreviewRow> {
        R::Field::ALL
            .iter()
            .filter_map(|&field| {
                let value = self.record.get(field);
                if value.is_empty() {
                    return None;
                }
                let shown = field.choice_label(value).unwrap_or(value);
                Some(PreviewRow {
                    name: field.name(),
                    label: field.label(),
                    value: shown.to_string(),
                })
            })
            .collect()
    }
}
