//! Renderer Port - the observable state contract for presentation layers.
//!
//! Any renderer implementing this trait is interchangeable: the core exposes
//! the current step, field values, per-field errors, and the submission
//! state, and the renderer decides how they look.

use crate::domain::{SubmissionState, WizardController};

/// Everything a presentation layer may observe about the current step.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardView {
    /// Zero-based index of the current step.
    pub step_index: usize,
    /// Total number of steps.
    pub step_count: usize,
    /// Title of the current section.
    pub section_name: String,
    /// Fields of the current section, in render order.
    pub fields: Vec<FieldView>,
}

/// One field of the current step, with its value and standing error.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    /// Field key.
    pub key: String,
    /// Question text.
    pub prompt: String,
    /// Whether the field blocks forward navigation when empty.
    pub required: bool,
    /// Current answer value.
    pub value: String,
    /// Validation error for this field, if any.
    pub error: Option<String>,
}

impl WizardView {
    /// Projects the controller's current step into a renderable view.
    pub fn from_controller(wizard: &WizardController) -> Self {
        let section = wizard
            .catalog()
            .section(wizard.current_step())
            .unwrap_or_else(|| panic!("current step {} out of range", wizard.current_step()));

        let fields = section
            .fields
            .iter()
            .map(|field| FieldView {
                key: field.key.clone(),
                prompt: field.prompt.clone(),
                required: field.required,
                value: wizard.answers().get(&field.key).to_string(),
                error: wizard.errors().get(&field.key).cloned(),
            })
            .collect();

        Self {
            step_index: wizard.current_step(),
            step_count: wizard.step_count(),
            section_name: section.name.clone(),
            fields,
        }
    }
}

/// Port for presentation layers consuming the wizard's observable state.
pub trait Renderer {
    /// Renders the current step: position, fields, values, and errors.
    fn render_step(&mut self, view: &WizardView);

    /// Renders the submission state: progress, results, or failure message.
    fn render_submission(&mut self, state: &SubmissionState);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Field, QuestionCatalog, Section};

    fn wizard() -> WizardController {
        WizardController::new(QuestionCatalog::new(vec![
            Section::new(
                "First",
                vec![Field::required("a", "A?"), Field::optional("a2", "A2?")],
            ),
            Section::new("Second", vec![Field::required("b", "B?")]),
        ]))
    }

    #[test]
    fn view_reflects_current_step_and_values() {
        let mut wizard = wizard();
        wizard.set_answer("a", "music");

        let view = WizardView::from_controller(&wizard);
        assert_eq!(view.step_index, 0);
        assert_eq!(view.step_count, 2);
        assert_eq!(view.section_name, "First");
        assert_eq!(view.fields.len(), 2);
        assert_eq!(view.fields[0].value, "music");
        assert!(view.fields[0].error.is_none());
        assert!(!view.fields[1].required);
    }

    #[test]
    fn view_carries_per_field_errors() {
        let mut wizard = wizard();
        wizard.advance(); // blocked, sets error on "a"

        let view = WizardView::from_controller(&wizard);
        assert_eq!(
            view.fields[0].error.as_deref(),
            Some(crate::domain::REQUIRED_FIELD_MESSAGE)
        );
        assert!(view.fields[1].error.is_none());
    }

    #[test]
    fn view_follows_navigation() {
        let mut wizard = wizard();
        wizard.set_answer("a", "music");
        wizard.advance();

        let view = WizardView::from_controller(&wizard);
        assert_eq!(view.step_index, 1);
        assert_eq!(view.section_name, "Second");
        assert_eq!(view.fields.len(), 1);
    }
}
