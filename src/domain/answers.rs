//! Answer set - the user's responses keyed by field.
//!
//! The key set is fixed at construction to exactly the catalog's keys and
//! never changes afterwards. Writing to an unknown key is a programming
//! error, not a runtime condition, and panics.

use serde::Serialize;
use std::collections::BTreeMap;

use super::catalog::QuestionCatalog;

/// Mapping from every catalog field key to its current string value.
///
/// Serializes as a flat JSON object, which is exactly the request body the
/// matching service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, String>,
}

impl AnswerSet {
    /// Creates an answer set with every catalog key mapped to the empty string.
    pub fn for_catalog(catalog: &QuestionCatalog) -> Self {
        let values = catalog
            .keys()
            .map(|k| (k.to_string(), String::new()))
            .collect();
        Self { values }
    }

    /// Sets the value for a key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not in the catalog's key set.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let slot = self
            .values
            .get_mut(key)
            .unwrap_or_else(|| panic!("unknown answer key: {}", key));
        *slot = value.into();
    }

    /// Returns the current value for a key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not in the catalog's key set.
    pub fn get(&self, key: &str) -> &str {
        self.values
            .get(key)
            .unwrap_or_else(|| panic!("unknown answer key: {}", key))
    }

    /// Returns true if the key belongs to the answer set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of answers (always the catalog's field count).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a valid catalog; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{default_catalog, Field, Section};

    fn small_catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Section::new("One", vec![Field::required("a", "A?")]),
            Section::new("Two", vec![Field::required("b", "B?")]),
        ])
    }

    #[test]
    fn for_catalog_initializes_every_key_empty() {
        let answers = AnswerSet::for_catalog(default_catalog());
        assert_eq!(answers.len(), 23);
        for key in answers.keys() {
            assert_eq!(answers.get(key), "");
        }
    }

    #[test]
    fn set_updates_value_without_changing_key_set() {
        let catalog = small_catalog();
        let mut answers = AnswerSet::for_catalog(&catalog);
        answers.set("a", "music");

        assert_eq!(answers.get("a"), "music");
        assert_eq!(answers.len(), 2);
        assert!(answers.contains_key("b"));
    }

    #[test]
    #[should_panic(expected = "unknown answer key: nope")]
    fn set_unknown_key_panics() {
        let catalog = small_catalog();
        let mut answers = AnswerSet::for_catalog(&catalog);
        answers.set("nope", "value");
    }

    #[test]
    #[should_panic(expected = "unknown answer key: nope")]
    fn get_unknown_key_panics() {
        let catalog = small_catalog();
        let answers = AnswerSet::for_catalog(&catalog);
        answers.get("nope");
    }

    #[test]
    fn serializes_to_flat_json_object() {
        let catalog = small_catalog();
        let mut answers = AnswerSet::for_catalog(&catalog);
        answers.set("a", "music");

        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json, serde_json::json!({ "a": "music", "b": "" }));
    }
}
