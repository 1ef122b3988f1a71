//! HTTP client for the external longacat solving service.
//!
//! The solver lives behind a network boundary and is opaque to the editor:
//! one POST per invocation, no retries, no batching, no caching. Identical
//! boards submitted twice both perform a full round trip.
//!
//! # Error Handling
//!
//! The public surface is total. Every way a solve can go wrong - transport
//! failure, timeout, non-success status, unparseable body, missing
//! `solution` field - folds into [`SolveOutcome::Failed`] with a
//! human-readable reason. Callers never see a transport error type and
//! never need a structured classification; the editor surfaces the reason
//! as a generic "solver unavailable" notice.

mod wire;

use std::time::Duration;

use longacat_types::{BoardSnapshot, SolveOutcome, Solver};

use wire::{SolveRequestBody, SolveResponseBody};

/// Endpoint of the local solving service, unless overridden.
pub const DEFAULT_SOLVER_URL: &str = "http://localhost:8000/solve";

/// Environment variable that overrides the solver endpoint.
pub const SOLVER_URL_ENV: &str = "LONGACAT_SOLVER_URL";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Endpoint and timeout knobs for [`SolveClient`].
#[derive(Debug, Clone)]
pub struct SolverConfig {
    endpoint: reqwest::Url,
    request_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum SolverConfigError {
    #[error("invalid solver endpoint {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },
}

impl SolverConfig {
    pub fn new(endpoint: &str) -> Result<Self, SolverConfigError> {
        let endpoint =
            reqwest::Url::parse(endpoint).map_err(|source| SolverConfigError::InvalidEndpoint {
                url: endpoint.to_string(),
                source,
            })?;
        Ok(Self {
            endpoint,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// [`DEFAULT_SOLVER_URL`], unless `LONGACAT_SOLVER_URL` is set.
    pub fn from_env() -> Result<Self, SolverConfigError> {
        let url =
            std::env::var(SOLVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SOLVER_URL.to_string());
        Self::new(&url)
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOLVER_URL).expect("default solver endpoint must parse")
    }
}

/// Why one solve attempt failed.
///
/// Internal taxonomy only: [`SolveClient`] collapses it into the opaque
/// [`SolveOutcome::Failed`] reason before it reaches the editor.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("solver request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("solver returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("solver response was not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("solver response did not contain a solution")]
    MissingSolution,
}

/// One round trip to the solver per [`Solver::solve`] call.
///
/// The underlying `reqwest::Client` is connection-pooled, so cloning the
/// client is cheap and concurrent calls share the pool.
#[derive(Debug, Clone)]
pub struct SolveClient {
    http: reqwest::Client,
    config: SolverConfig,
}

impl SolveClient {
    pub fn new(config: SolverConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(config.request_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    async fn request_solution(&self, board: &BoardSnapshot) -> Result<Vec<String>, SolveError> {
        let body = SolveRequestBody::from(board);
        tracing::debug!(
            size = board.size(),
            endpoint = %self.config.endpoint,
            "submitting board to solver"
        );

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SolveError::Status(status));
        }

        let text = response.text().await?;
        let parsed: SolveResponseBody = serde_json::from_str(&text)?;
        parsed.solution.ok_or(SolveError::MissingSolution)
    }
}

impl Solver for SolveClient {
    async fn solve(&self, board: &BoardSnapshot) -> SolveOutcome {
        match self.request_solution(board).await {
            Ok(steps) => {
                tracing::debug!(steps = steps.len(), "solver returned a move sequence");
                SolveOutcome::Solved(steps)
            }
            Err(e) => {
                tracing::warn!(error = %e, "solve failed");
                SolveOutcome::Failed(e.to_string())
            }
        }
    }
}
