//! HTTP Match Provider - reqwest implementation of the MatchProvider port.
//!
//! Talks to the matching service's JSON API:
//!
//! - `POST /api/match-careers` with the flat answer object
//! - `GET /api/health` for readiness
//!
//! Response classification is a pure function of status code and body so the
//! mapping rules are testable without a live server.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpMatchConfig::new("http://localhost:8000")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let provider = HttpMatchProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{AnswerSet, CareerMatch};
use crate::ports::{MatchError, MatchProvider, ServiceHealth};

/// Configuration for the HTTP match provider.
#[derive(Debug, Clone)]
pub struct HttpMatchConfig {
    /// Base URL of the matching service (no trailing slash).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpMatchConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Matching service client over HTTP.
pub struct HttpMatchProvider {
    config: HttpMatchConfig,
    client: Client,
}

impl HttpMatchProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: HttpMatchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn match_url(&self) -> String {
        format!("{}/api/match-careers", self.config.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/api/health", self.config.base_url)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> MatchError {
        if err.is_timeout() {
            MatchError::Timeout {
                timeout_secs: self.config.timeout.as_secs() as u32,
            }
        } else if err.is_connect() {
            MatchError::network(format!("Connection failed: {}", err))
        } else {
            MatchError::network(err.to_string())
        }
    }
}

#[async_trait]
impl MatchProvider for HttpMatchProvider {
    async fn match_careers(&self, answers: &AnswerSet) -> Result<Vec<CareerMatch>, MatchError> {
        tracing::info!(url = %self.match_url(), "submitting answers to matching service");

        let response = self
            .client
            .post(self.match_url())
            .header("Content-Type", "application/json")
            .json(answers)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("match request failed in transport: {}", e);
                self.map_transport_error(e)
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let result = classify_match_response(status, &body);
        match &result {
            Ok(matches) => {
                tracing::info!(count = matches.len(), "received match results");
            }
            Err(e) => {
                tracing::warn!(status, "matching service reported failure: {}", e);
            }
        }
        result
    }

    async fn health(&self) -> Result<ServiceHealth, MatchError> {
        let response = self
            .client
            .get(self.health_url())
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !(200..300).contains(&status) {
            return Err(MatchError::service(status, parse_detail(&body)));
        }

        serde_json::from_str(&body).map_err(|e| MatchError::parse(e.to_string()))
    }
}

/// Success payload: a match list, or an embedded application-level error.
#[derive(Debug, Deserialize)]
struct MatchResponseBody {
    #[serde(default)]
    matches: Option<Vec<CareerMatch>>,
    #[serde(default)]
    error: Option<String>,
}

/// FastAPI-style structured error payload.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.detail)
}

/// Maps a raw response to the match list or a classified error.
///
/// An embedded `error` field takes precedence over `matches` even on a
/// success status; a missing `matches` field means an empty list.
fn classify_match_response(status: u16, body: &str) -> Result<Vec<CareerMatch>, MatchError> {
    if !(200..300).contains(&status) {
        return Err(MatchError::service(status, parse_detail(body)));
    }

    let payload: MatchResponseBody =
        serde_json::from_str(body).map_err(|e| MatchError::parse(e.to_string()))?;

    if let Some(message) = payload.error {
        return Err(MatchError::Application(message));
    }

    Ok(payload.matches.unwrap_or_default())
}
