//! Matching service adapters.

mod http_provider;
mod mock_provider;

pub use http_provider::{HttpMatchConfig, HttpMatchProvider};
pub use mock_provider::{MockMatchProvider, MockOutcome};
