//! Ports - interfaces between the wizard core and the outside world.

pub mod match_provider;
pub mod renderer;

pub use match_provider::{MatchError, MatchProvider, ServiceHealth, CONNECTIVITY_MESSAGE};
pub use renderer::{FieldView, Renderer, WizardView};
