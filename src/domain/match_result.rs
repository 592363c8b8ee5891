//! Match results returned by the matching service.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a percentage is outside `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("match percentage must be between 0 and 100, got {0}")]
pub struct InvalidPercentage(pub f64);

/// A match score between 0 and 100 inclusive.
///
/// Fractional values are meaningful (the service reports cosine similarity
/// scaled to a percentage), so this wraps an `f64` rather than an integer.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct MatchPercentage(f64);

impl MatchPercentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new MatchPercentage, clamping to the valid range.
    ///
    /// NaN clamps to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a MatchPercentage, returning an error if out of range.
    pub fn try_new(value: f64) -> Result<Self, InvalidPercentage> {
        if value.is_nan() || !(0.0..=100.0).contains(&value) {
            return Err(InvalidPercentage(value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for MatchPercentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for MatchPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

// Wire values are clamped rather than rejected; a score marginally outside
// the range should not fail the whole submission.
impl<'de> Deserialize<'de> for MatchPercentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}

/// One ranked career suggestion from the matching service.
///
/// Immutable once constructed; result order is whatever the service
/// returned, with no client-side re-sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    /// Job title of the suggested career.
    pub job_title: String,
    /// How strongly the answers matched this career.
    pub match_percentage: MatchPercentage,
    /// Short description of the career.
    pub description: String,
    /// Why this career matched the user's answers.
    pub reasoning: String,
    /// Skills typically required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    /// Typical salary range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    /// Typical education requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// Industry this career belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_out_of_range_values() {
        assert_eq!(MatchPercentage::new(-3.0).value(), 0.0);
        assert_eq!(MatchPercentage::new(250.0).value(), 100.0);
        assert_eq!(MatchPercentage::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn percentage_new_preserves_fractions() {
        assert_eq!(MatchPercentage::new(87.5).value(), 87.5);
    }

    #[test]
    fn percentage_try_new_rejects_out_of_range() {
        assert!(MatchPercentage::try_new(100.1).is_err());
        assert!(MatchPercentage::try_new(-0.1).is_err());
        assert!(MatchPercentage::try_new(f64::NAN).is_err());
        assert_eq!(MatchPercentage::try_new(87.5).unwrap().value(), 87.5);
    }

    #[test]
    fn percentage_displays_one_decimal() {
        assert_eq!(format!("{}", MatchPercentage::new(87.5)), "87.5%");
        assert_eq!(format!("{}", MatchPercentage::ZERO), "0.0%");
    }

    #[test]
    fn career_match_deserializes_from_wire_names() {
        let json = serde_json::json!({
            "job_title": "Data Analyst",
            "match_percentage": 87.5,
            "description": "Works with data.",
            "reasoning": "Strong analytical answers.",
            "salary_range": "$60k-$90k"
        });

        let m: CareerMatch = serde_json::from_value(json).unwrap();
        assert_eq!(m.job_title, "Data Analyst");
        assert_eq!(m.match_percentage.value(), 87.5);
        assert_eq!(m.salary_range.as_deref(), Some("$60k-$90k"));
        assert!(m.skills.is_none());
        assert!(m.education.is_none());
        assert!(m.industry.is_none());
    }

    #[test]
    fn wire_percentage_out_of_range_is_clamped() {
        let m: CareerMatch = serde_json::from_value(serde_json::json!({
            "job_title": "X",
            "match_percentage": 101.2,
            "description": "d",
            "reasoning": "r"
        }))
        .unwrap();
        assert_eq!(m.match_percentage.value(), 100.0);
    }
}
