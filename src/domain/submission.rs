//! Submission lifecycle state.
//!
//! A submission moves `Idle -> InFlight -> Succeeded | Failed`, and a retry
//! re-enters `InFlight` from either terminal outcome. `InFlight` is the only
//! state a new submission may not start from.

use super::match_result::CareerMatch;
use super::state_machine::StateMachine;

/// Current state of the (single) submission, with outcome data attached.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    /// No submission has been attempted since the last outcome was consumed.
    Idle,
    /// Exactly one request is outstanding.
    InFlight,
    /// The service returned a match list (possibly empty).
    Succeeded(Vec<CareerMatch>),
    /// The submission failed; the message is ready to show the user.
    Failed(String),
}

impl SubmissionState {
    /// The data-free phase of this state.
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionState::Idle => SubmissionPhase::Idle,
            SubmissionState::InFlight => SubmissionPhase::InFlight,
            SubmissionState::Succeeded(_) => SubmissionPhase::Succeeded,
            SubmissionState::Failed(_) => SubmissionPhase::Failed,
        }
    }

    /// Returns true while a request is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }

    /// The match list, if the submission succeeded.
    pub fn matches(&self) -> Option<&[CareerMatch]> {
        match self {
            SubmissionState::Succeeded(matches) => Some(matches),
            _ => None,
        }
    }

    /// The failure message, if the submission failed.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle
    }
}

/// Submission lifecycle without outcome data, for transition validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionPhase {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl StateMachine for SubmissionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, target),
            (Idle, InFlight)
                | (InFlight, Succeeded)
                | (InFlight, Failed)
                | (Succeeded, InFlight)
                | (Failed, InFlight)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionPhase::*;
        match self {
            Idle => vec![InFlight],
            InFlight => vec![Succeeded, Failed],
            Succeeded => vec![InFlight],
            Failed => vec![InFlight],
        }
    }
}
