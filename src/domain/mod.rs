//! Domain layer - the wizard core.
//!
//! Pure types and state machines with no I/O: the question catalog, the
//! answer set, the wizard controller, the submission lifecycle, and match
//! results. Adapters and the application layer build on these.

pub mod answers;
pub mod catalog;
pub mod match_result;
pub mod state_machine;
pub mod submission;
pub mod wizard;

pub use answers::AnswerSet;
pub use catalog::{default_catalog, Field, QuestionCatalog, Section};
pub use match_result::{CareerMatch, InvalidPercentage, MatchPercentage};
pub use state_machine::{StateMachine, TransitionError};
pub use submission::{SubmissionPhase, SubmissionState};
pub use wizard::{StepErrors, WizardController, REQUIRED_FIELD_MESSAGE};
