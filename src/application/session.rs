//! Match session - the submission manager on top of the wizard controller.
//!
//! Owns the single WizardState/SubmissionState pair for a questionnaire
//! session. All mutations are sequential; the only suspension point is the
//! outbound call to the matching service, during which the state reads
//! `InFlight` and new submissions are rejected.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::{
    StateMachine, StepErrors, SubmissionPhase, SubmissionState, WizardController,
};
use crate::ports::MatchProvider;

/// Errors that prevent a submission from starting.
///
/// A refused submit never issues a network call and never changes the
/// submission state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// A submission is already outstanding.
    #[error("a submission is already in flight")]
    AlreadyInFlight,

    /// The final step failed validation; the per-field errors are attached
    /// and also stored on the wizard for rendering.
    #[error("the final step has validation errors")]
    ValidationFailed(StepErrors),
}

/// One questionnaire session: wizard position, answers, and submission state.
pub struct MatchSession {
    wizard: WizardController,
    state: SubmissionState,
    provider: Arc<dyn MatchProvider>,
}

impl MatchSession {
    /// Creates a session over the given catalog-backed wizard and provider.
    pub fn new(wizard: WizardController, provider: Arc<dyn MatchProvider>) -> Self {
        Self {
            wizard,
            state: SubmissionState::Idle,
            provider,
        }
    }

    /// Creates a session over the production questionnaire.
    pub fn with_default_catalog(provider: Arc<dyn MatchProvider>) -> Self {
        Self::new(WizardController::with_default_catalog(), provider)
    }

    /// The wizard controller (read access for rendering).
    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    /// The wizard controller (mutable, for navigation and edits).
    pub fn wizard_mut(&mut self) -> &mut WizardController {
        &mut self.wizard
    }

    /// Current submission state.
    pub fn submission(&self) -> &SubmissionState {
        &self.state
    }

    /// Records an answer. Delegates to the wizard controller.
    pub fn set_answer(&mut self, key: &str, value: impl Into<String>) {
        self.wizard.set_answer(key, value);
    }

    /// Submits the complete answer set to the matching service.
    ///
    /// Preconditions: no submission may be in flight, and the final step
    /// must validate. On refusal no network call occurs. Otherwise exactly
    /// one request is issued and the session ends up `Succeeded` or
    /// `Failed`; the returned reference is the new state.
    pub async fn submit(&mut self) -> Result<&SubmissionState, SubmitError> {
        if self.state.phase() == SubmissionPhase::InFlight {
            return Err(SubmitError::AlreadyInFlight);
        }

        let errors = self.wizard.validate_step(self.wizard.catalog().last_step());
        if !errors.is_empty() {
            tracing::warn!(fields = errors.len(), "submit refused by validation");
            return Err(SubmitError::ValidationFailed(errors.clone()));
        }

        self.transition(SubmissionState::InFlight);

        let outcome = self.provider.match_careers(self.wizard.answers()).await;
        let next = match outcome {
            Ok(matches) => {
                tracing::info!(count = matches.len(), "submission succeeded");
                SubmissionState::Succeeded(matches)
            }
            Err(error) => {
                tracing::warn!("submission failed: {}", error);
                SubmissionState::Failed(error.user_message())
            }
        };
        self.transition(next);

        Ok(&self.state)
    }

    /// Applies a validated lifecycle transition.
    ///
    /// # Panics
    ///
    /// Panics if the transition is not allowed by the lifecycle rules; that
    /// is a defect in this module, not a runtime condition.
    fn transition(&mut self, next: SubmissionState) {
        let phase = self
            .state
            .phase()
            .transition_to(next.phase())
            .unwrap_or_else(|e| panic!("submission lifecycle violated: {}", e));
        debug_assert_eq!(phase, next.phase());
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::matching::MockMatchProvider;
    use crate::domain::catalog::{Field, QuestionCatalog, Section};
    use crate::domain::{CareerMatch, MatchPercentage};
    use crate::ports::{MatchError, CONNECTIVITY_MESSAGE};

    fn two_step_catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Section::new("One", vec![Field::required("a", "A?")]),
            Section::new("Two", vec![Field::required("b", "B?")]),
        ])
    }

    fn session_with(provider: MockMatchProvider) -> (MatchSession, MockMatchProvider) {
        let session = MatchSession::new(
            WizardController::new(two_step_catalog()),
            Arc::new(provider.clone()),
        );
        (session, provider)
    }

    fn filled_session(provider: MockMatchProvider) -> (MatchSession, MockMatchProvider) {
        let (mut session, provider) = session_with(provider);
        session.set_answer("a", "music");
        session.set_answer("b", "maths");
        (session, provider)
    }

    fn data_analyst() -> CareerMatch {
        CareerMatch {
            job_title: "Data Analyst".to_string(),
            match_percentage: MatchPercentage::new(87.5),
            description: "Works with data.".to_string(),
            reasoning: "Analytical answers.".to_string(),
            skills: None,
            salary_range: None,
            education: None,
            industry: None,
        }
    }

    #[tokio::test]
    async fn submit_succeeds_with_service_matches() {
        // Scenario C.
        let (mut session, provider) =
            filled_session(MockMatchProvider::new().with_matches(vec![data_analyst()]));

        let state = session.submit().await.unwrap();
        let matches = state.matches().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_percentage.value(), 87.5);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn submit_with_invalid_final_step_is_refused_without_network_call() {
        let (mut session, provider) =
            session_with(MockMatchProvider::new().with_matches(vec![data_analyst()]));
        session.set_answer("a", "music"); // final step field "b" left empty

        let err = session.submit().await.unwrap_err();
        match err {
            SubmitError::ValidationFailed(errors) => {
                assert!(errors.contains_key("b"));
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
        assert_eq!(provider.call_count(), 0);
        assert_eq!(session.submission(), &SubmissionState::Idle);
        // Errors become visible to the user, as on a blocked advance.
        assert!(session.wizard().errors().contains_key("b"));
    }

    #[tokio::test]
    async fn application_error_yields_failed_not_empty_success() {
        // Scenario D.
        let (mut session, _) = filled_session(
            MockMatchProvider::new()
                .with_error(MatchError::Application("insufficient input".to_string())),
        );

        let state = session.submit().await.unwrap();
        assert_eq!(state.failure_message(), Some("insufficient input"));
        assert!(state.matches().is_none());
    }

    #[tokio::test]
    async fn transport_failure_yields_generic_connectivity_message() {
        // Scenario E.
        let (mut session, _) = filled_session(
            MockMatchProvider::new().with_error(MatchError::network("unreachable")),
        );

        let state = session.submit().await.unwrap();
        assert_eq!(state.failure_message(), Some(CONNECTIVITY_MESSAGE));
    }

    #[tokio::test]
    async fn service_detail_is_surfaced_verbatim() {
        let (mut session, _) = filled_session(
            MockMatchProvider::new()
                .with_error(MatchError::service(503, Some("Service not ready".to_string()))),
        );

        let state = session.submit().await.unwrap();
        assert_eq!(state.failure_message(), Some("Service not ready"));
    }

    #[tokio::test]
    async fn submit_while_in_flight_is_rejected() {
        // Scenario F. The session is single-owner, so the overlapping call
        // is modeled by pinning the state to InFlight directly.
        let (mut session, provider) = filled_session(MockMatchProvider::new());
        session.state = SubmissionState::InFlight;

        let err = session.submit().await.unwrap_err();
        assert_eq!(err, SubmitError::AlreadyInFlight);
        assert_eq!(provider.call_count(), 0);
        assert!(session.submission().is_in_flight());
    }

    #[tokio::test]
    async fn failed_submission_can_be_retried() {
        let (mut session, provider) = filled_session(
            MockMatchProvider::new()
                .with_error(MatchError::network("unreachable"))
                .with_matches(vec![data_analyst()]),
        );

        let first = session.submit().await.unwrap();
        assert!(first.failure_message().is_some());

        let second = session.submit().await.unwrap();
        assert_eq!(second.matches().unwrap().len(), 1);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn submit_sends_the_complete_answer_set() {
        let (mut session, provider) = filled_session(MockMatchProvider::new());

        session.submit().await.unwrap();
        let sent = &provider.calls()[0];
        assert_eq!(sent.len(), 2);
        assert_eq!(sent.get("a"), "music");
        assert_eq!(sent.get("b"), "maths");
    }

    #[tokio::test]
    async fn empty_match_list_is_still_a_success() {
        let (mut session, _) = filled_session(MockMatchProvider::new().with_matches(vec![]));

        let state = session.submit().await.unwrap();
        assert_eq!(state.matches(), Some(&[][..]));
    }
}
