//! Application layer - orchestrates the wizard and the submission lifecycle.

pub mod session;

pub use session::{MatchSession, SubmitError};
