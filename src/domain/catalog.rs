//! Question catalog - the static questionnaire definition.
//!
//! Sections are ordered and their order defines wizard step order; field
//! order within a section defines render order. The catalog is immutable
//! after construction.

use once_cell::sync::Lazy;

/// A single free-text question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Unique, stable identifier. Doubles as the wire key.
    pub key: String,
    /// Question text shown to the user.
    pub prompt: String,
    /// Whether the field blocks forward navigation when empty.
    pub required: bool,
}

impl Field {
    /// Creates a required field.
    pub fn required(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
            required: true,
        }
    }

    /// Creates an optional field.
    pub fn optional(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
            required: false,
        }
    }
}

/// A named, ordered group of fields rendered as one wizard step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section title.
    pub name: String,
    /// Fields in render order.
    pub fields: Vec<Field>,
}

impl Section {
    /// Creates a new section.
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Ordered list of sections defining the whole questionnaire.
///
/// Keys must be unique across all sections; a duplicate is a defect in the
/// static definition and construction panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    sections: Vec<Section>,
}

impl QuestionCatalog {
    /// Creates a catalog from ordered sections.
    ///
    /// # Panics
    ///
    /// Panics if the catalog is empty or any field key appears twice.
    pub fn new(sections: Vec<Section>) -> Self {
        assert!(!sections.is_empty(), "catalog must have at least one section");

        let mut seen = std::collections::HashSet::new();
        for section in &sections {
            for field in &section.fields {
                assert!(
                    seen.insert(field.key.as_str()),
                    "duplicate field key in catalog: {}",
                    field.key
                );
            }
        }

        Self { sections }
    }

    /// All sections in step order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the section for a step index, if in range.
    pub fn section(&self, step: usize) -> Option<&Section> {
        self.sections.get(step)
    }

    /// Number of wizard steps.
    pub fn step_count(&self) -> usize {
        self.sections.len()
    }

    /// Index of the final step.
    pub fn last_step(&self) -> usize {
        self.sections.len() - 1
    }

    /// All field keys, in section then field order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter().map(|f| f.key.as_str()))
    }

    /// Returns true if the key belongs to any field in the catalog.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }
}

/// The production questionnaire: eight sections, 23 free-text questions.
///
/// The lead question of each section is required; follow-ups are optional.
/// The matching service weights the lead answers highest.
static CAREER_CATALOG: Lazy<QuestionCatalog> = Lazy::new(|| {
    QuestionCatalog::new(vec![
        Section::new(
            "Interests",
            vec![
                Field::required("interests", "What topics or activities genuinely interest you?"),
                Field::optional(
                    "interests_fulltime",
                    "Could you see yourself working full-time in this area?",
                ),
                Field::optional(
                    "interests_appeal",
                    "What specifically appeals to you about these interests?",
                ),
            ],
        ),
        Section::new(
            "Skills",
            vec![
                Field::required("skills", "What are you naturally good at?"),
                Field::optional("skills_natural", "What skills come most naturally to you?"),
                Field::optional(
                    "skills_energized",
                    "What activities leave you feeling energized rather than drained?",
                ),
            ],
        ),
        Section::new(
            "Problem Solving",
            vec![
                Field::required("problem_solving", "What types of problems do you enjoy solving?"),
                Field::optional("problem_method", "How do you typically approach problem-solving?"),
                Field::optional(
                    "problem_enjoy",
                    "What about problem-solving do you find most satisfying?",
                ),
            ],
        ),
        Section::new(
            "Work Style",
            vec![
                Field::required(
                    "work_style",
                    "Do you prefer working alone, in teams, or a mix of both?",
                ),
                Field::optional(
                    "work_routine",
                    "Do you prefer structured routines or flexible schedules?",
                ),
                Field::optional("work_goals", "What does success look like to you in a career?"),
            ],
        ),
        Section::new(
            "Values",
            vec![
                Field::required("values", "What matters most to you in a career?"),
                Field::optional("values_why", "Why are these values important to you?"),
                Field::optional(
                    "values_choice",
                    "How do these values influence your career choices?",
                ),
            ],
        ),
        Section::new(
            "Inspiration",
            vec![
                Field::required(
                    "career_inspiration",
                    "What careers or professionals inspire you?",
                ),
                Field::optional("inspiration_standout", "What makes them stand out to you?"),
                Field::optional(
                    "inspiration_pursue",
                    "Would you want to pursue a similar path?",
                ),
            ],
        ),
        Section::new(
            "Environment",
            vec![
                Field::required(
                    "environment_preference",
                    "What work environment do you thrive in?",
                ),
                Field::optional(
                    "environment_why",
                    "Why does this environment work best for you?",
                ),
                Field::optional(
                    "focus_preference",
                    "Do you prefer variety or deep focus in your work?",
                ),
            ],
        ),
        Section::new(
            "Impact",
            vec![
                Field::required("impact_preference", "What kind of impact do you want to make?"),
                Field::optional("impact_why", "Why is this impact important to you?"),
            ],
        ),
    ])
});

/// Returns the production catalog.
pub fn default_catalog() -> &'static QuestionCatalog {
    &CAREER_CATALOG
}
