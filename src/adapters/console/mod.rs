//! Console renderer - plain-text implementation of the Renderer port.
//!
//! Presentation only; all wizard semantics live in the domain and
//! application layers.

use std::io::Write;

use crate::domain::SubmissionState;
use crate::ports::{Renderer, WizardView};

/// Renders the wizard to any `Write` target (stdout in the binary).
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_line(&mut self, line: &str) {
        // Console output failures are not actionable; drop them.
        let _ = writeln!(self.out, "{}", line);
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render_step(&mut self, view: &WizardView) {
        self.write_line("");
        self.write_line(&format!(
            "=== Step {} of {}: {} ===",
            view.step_index + 1,
            view.step_count,
            view.section_name
        ));

        for field in &view.fields {
            let marker = if field.required { "*" } else { " " };
            self.write_line(&format!("{} {}", marker, field.prompt));
            if !field.value.is_empty() {
                self.write_line(&format!("    > {}", field.value));
            }
            if let Some(error) = &field.error {
                self.write_line(&format!("    ! {}", error));
            }
        }
    }

    fn render_submission(&mut self, state: &SubmissionState) {
        match state {
            SubmissionState::Idle => {}
            SubmissionState::InFlight => {
                self.write_line("Finding your matches...");
            }
            SubmissionState::Succeeded(matches) => {
                self.write_line("");
                self.write_line("=== Your Top Career Matches ===");
                if matches.is_empty() {
                    self.write_line("No matches found.");
                }
                for m in matches {
                    self.write_line("");
                    self.write_line(&format!("{} ({} match)", m.job_title, m.match_percentage));
                    self.write_line(&format!("  {}", m.description));
                    self.write_line(&format!("  Why this matches you: {}", m.reasoning));
                    if let Some(skills) = &m.skills {
                        self.write_line(&format!("  Required skills: {}", skills));
                    }
                    if let Some(salary) = &m.salary_range {
                        self.write_line(&format!("  Salary range: {}", salary));
                    }
                    if let Some(education) = &m.education {
                        self.write_line(&format!("  Education: {}", education));
                    }
                    if let Some(industry) = &m.industry {
                        self.write_line(&format!("  Industry: {}", industry));
                    }
                }
            }
            SubmissionState::Failed(message) => {
                self.write_line("");
                self.write_line(&format!("Error: {}", message));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Field, QuestionCatalog, Section};
    use crate::domain::{CareerMatch, MatchPercentage, WizardController};

    fn render_step_to_string(wizard: &WizardController) -> String {
        let mut buf = Vec::new();
        let mut renderer = ConsoleRenderer::new(&mut buf);
        renderer.render_step(&WizardView::from_controller(wizard));
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn step_render_shows_position_prompts_and_errors() {
        let mut wizard = WizardController::new(QuestionCatalog::new(vec![
            Section::new("Interests", vec![Field::required("a", "What interests you?")]),
            Section::new("Skills", vec![Field::required("b", "What are you good at?")]),
        ]));
        wizard.advance(); // blocked, error on "a"

        let out = render_step_to_string(&wizard);
        assert!(out.contains("Step 1 of 2: Interests"));
        assert!(out.contains("* What interests you?"));
        assert!(out.contains("! This field is required"));
    }

    #[test]
    fn submission_render_shows_matches_and_failures() {
        let mut buf = Vec::new();
        let mut renderer = ConsoleRenderer::new(&mut buf);

        renderer.render_submission(&SubmissionState::Succeeded(vec![CareerMatch {
            job_title: "Data Analyst".to_string(),
            match_percentage: MatchPercentage::new(87.5),
            description: "Works with data.".to_string(),
            reasoning: "Analytical answers.".to_string(),
            skills: Some("SQL, statistics".to_string()),
            salary_range: None,
            education: None,
            industry: None,
        }]));
        renderer.render_submission(&SubmissionState::Failed("insufficient input".to_string()));

        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Data Analyst (87.5% match)"));
        assert!(out.contains("Required skills: SQL, statistics"));
        assert!(out.contains("Error: insufficient input"));
    }
}
