//! Wizard controller - step sequencing and per-step validation.
//!
//! Forward navigation is gated by validation of the current step's required
//! fields; backward navigation is unconditional and never touches errors.
//! Validation is scoped to one step at a time: errors from a step the user
//! has navigated away from are discarded, not retained.

use std::collections::BTreeMap;

use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;

/// Message attached to every failed required-field check.
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required";

/// Per-field validation errors for the current step, keyed by field key.
pub type StepErrors = BTreeMap<String, String>;

/// Owns the wizard position, the answer set, and the current error set.
#[derive(Debug, Clone)]
pub struct WizardController {
    catalog: QuestionCatalog,
    current_step: usize,
    answers: AnswerSet,
    errors: StepErrors,
}

impl WizardController {
    /// Creates a controller at step 0 with all answers empty.
    pub fn new(catalog: QuestionCatalog) -> Self {
        let answers = AnswerSet::for_catalog(&catalog);
        Self {
            catalog,
            current_step: 0,
            answers,
            errors: StepErrors::new(),
        }
    }

    /// Creates a controller over the production questionnaire.
    pub fn with_default_catalog() -> Self {
        Self::new(super::catalog::default_catalog().clone())
    }

    /// The catalog driving this wizard.
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Current step index, in `[0, step_count)`.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Total number of steps.
    pub fn step_count(&self) -> usize {
        self.catalog.step_count()
    }

    /// Returns true when the wizard is on the final step.
    pub fn is_last_step(&self) -> bool {
        self.current_step == self.catalog.last_step()
    }

    /// The full answer set.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Validation errors for the current step.
    pub fn errors(&self) -> &StepErrors {
        &self.errors
    }

    /// Records an answer and clears any standing error for that key.
    ///
    /// Error clearing is tied to the edit itself so a field stops being
    /// flagged on the very mutation that fixes it.
    ///
    /// # Panics
    ///
    /// Panics if the key is not in the catalog (contract violation).
    pub fn set_answer(&mut self, key: &str, value: impl Into<String>) {
        self.answers.set(key, value);
        self.errors.remove(key);
    }

    /// Recomputes validation for the given step and stores the result as the
    /// current error set, replacing any prior errors wholesale.
    ///
    /// Only `required` fields are checked: a value is valid when it is
    /// non-empty after trimming. A step with no required fields always
    /// validates successfully.
    pub fn validate_step(&mut self, step: usize) -> &StepErrors {
        let mut errors = StepErrors::new();

        if let Some(section) = self.catalog.section(step) {
            for field in &section.fields {
                if field.required && self.answers.get(&field.key).trim().is_empty() {
                    errors.insert(field.key.clone(), REQUIRED_FIELD_MESSAGE.to_string());
                }
            }
        }

        self.errors = errors;
        &self.errors
    }

    /// Validates the current step and moves forward if it passes.
    ///
    /// Returns true if the step index changed. On the final step this is a
    /// navigation no-op even when valid; submission goes through the
    /// application layer instead.
    pub fn advance(&mut self) -> bool {
        if !self.validate_step(self.current_step).is_empty() {
            return false;
        }
        if self.current_step < self.catalog.last_step() {
            self.current_step += 1;
            return true;
        }
        false
    }

    /// Moves backward if not at step 0. Never validates, never mutates errors.
    ///
    /// Returns true if the step index changed.
    pub fn retreat(&mut self) -> bool {
        if self.current_step > 0 {
            self.current_step -= 1;
            return true;
        }
        false
    }
}
