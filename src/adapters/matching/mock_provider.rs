//! Mock Match Provider for testing.
//!
//! Configurable mock implementation of the MatchProvider port, allowing
//! tests to run the full submission lifecycle without a live service.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockMatchProvider::new()
//!     .with_matches(vec![data_analyst()])
//!     .with_error(MatchError::network("unreachable"));
//!
//! // First call succeeds, second fails.
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::{AnswerSet, CareerMatch};
use crate::ports::{MatchError, MatchProvider, ServiceHealth};

/// A scripted outcome, consumed in order.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return these matches.
    Matches(Vec<CareerMatch>),
    /// Return this error.
    Error(MatchError),
}

/// Mock matching service for testing.
#[derive(Debug, Clone)]
pub struct MockMatchProvider {
    /// Pre-configured outcomes (consumed in order).
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Answer sets received, for verification.
    calls: Arc<Mutex<Vec<AnswerSet>>>,
    /// Health to report.
    health: ServiceHealth,
}

impl Default for MockMatchProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMatchProvider {
    /// Creates a mock with no scripted outcomes and a ready health report.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
            health: ServiceHealth {
                status: "ok".to_string(),
                careers: 870,
            },
        }
    }

    /// Queues a successful outcome.
    pub fn with_matches(self, matches: Vec<CareerMatch>) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Matches(matches));
        self
    }

    /// Queues an error outcome.
    pub fn with_error(self, error: MatchError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Error(error));
        self
    }

    /// Adds simulated latency to every request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the health report.
    pub fn with_health(mut self, status: impl Into<String>, careers: u64) -> Self {
        self.health = ServiceHealth {
            status: status.into(),
            careers,
        };
        self
    }

    /// Number of match requests received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Answer sets received, in call order.
    pub fn calls(&self) -> Vec<AnswerSet> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MatchProvider for MockMatchProvider {
    async fn match_careers(&self, answers: &AnswerSet) -> Result<Vec<CareerMatch>, MatchError> {
        self.calls.lock().unwrap().push(answers.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(MockOutcome::Matches(matches)) => Ok(matches),
            Some(MockOutcome::Error(error)) => Err(error),
            None => Ok(Vec::new()),
        }
    }

    async fn health(&self) -> Result<ServiceHealth, MatchError> {
        Ok(self.health.clone())
    }
}
