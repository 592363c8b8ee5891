//! Match Provider Port - interface to the career matching service.
//!
//! The matching algorithm lives behind this port: the wizard core only sees
//! one request/response exchange carrying the full answer set, and either a
//! ranked match list or a classified error.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{AnswerSet, CareerMatch};

/// Generic connectivity message shown when no response could be obtained.
pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to connect to the matching service. Please try again.";

/// Port for the career matching service.
///
/// Implementations translate between the service's HTTP API and domain
/// types. Exactly one request is issued per call; retrying is the caller's
/// decision.
#[async_trait]
pub trait MatchProvider: Send + Sync {
    /// Submits the complete answer set and returns ranked matches.
    ///
    /// The returned order is the service's ranking and must be preserved.
    async fn match_careers(&self, answers: &AnswerSet) -> Result<Vec<CareerMatch>, MatchError>;

    /// Checks whether the service has finished loading its career data.
    async fn health(&self) -> Result<ServiceHealth, MatchError>;
}

/// Readiness report from the matching service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceHealth {
    /// "ok" once career data is loaded, "loading" before that.
    pub status: String,
    /// Number of careers in the service's catalog.
    #[serde(default)]
    pub careers: u64,
}

impl ServiceHealth {
    /// Returns true once the service can answer match requests.
    pub fn is_ready(&self) -> bool {
        self.status == "ok"
    }
}

/// Matching service errors, classified per failure source.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MatchError {
    /// The request could not be delivered or no response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The transport gave up waiting for a response.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// The service responded with a non-success status code.
    #[error("service error {status}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Structured error payload (`detail` field), when present.
        detail: Option<String>,
    },

    /// The service responded successfully but reported an application-level
    /// failure via an embedded `error` field.
    #[error("matching failed: {0}")]
    Application(String),

    /// The response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl MatchError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a service error from a status code and optional detail.
    pub fn service(status: u16, detail: Option<String>) -> Self {
        Self::Service { status, detail }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// The message surfaced to the user when this error fails a submission.
    ///
    /// Takes the most specific message available: an embedded application
    /// error verbatim, a structured `detail` when the service sent one, a
    /// status-derived fallback otherwise, and a generic connectivity message
    /// for transport failures.
    pub fn user_message(&self) -> String {
        match self {
            MatchError::Network(_) | MatchError::Timeout { .. } => {
                CONNECTIVITY_MESSAGE.to_string()
            }
            MatchError::Service { status, detail } => detail
                .clone()
                .unwrap_or_else(|| format!("Server error: {}", status)),
            MatchError::Application(message) => message.clone(),
            MatchError::Parse(_) => {
                "The matching service returned an unexpected response.".to_string()
            }
        }
    }
}
