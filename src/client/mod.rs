//! Request strategies: interchangeable units of work that issue one
//! network call for a scenario and report elapsed time and payload size.
//!
//! Timing convention, applied identically to both strategies: the measured
//! window opens just before the request is dispatched and closes once the
//! full response body has been read. Request construction, status checks,
//! and JSON decoding of the GraphQL envelope all happen outside the
//! window, so the comparison covers the wire exchange and nothing else.

mod graphql;
mod rest;

#[cfg(test)]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{RequestError, SetupError};
use crate::scenarios::Scenario;

pub use graphql::GraphQlStrategy;
pub use rest::RestStrategy;

/// Successful outcome of a single trial: elapsed wall-clock time and the
/// size of the response payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub response_time_ms: f64,
    pub response_size_bytes: u64,
}

/// One protocol's way of executing a scenario. Strategies hold their own
/// persistent connection pool, never log, and never mutate the scenario;
/// all failure handling lives with the caller.
#[async_trait]
pub trait RequestStrategy: Send + Sync {
    /// Strategy identifier used as the `treatment` grouping key.
    fn treatment(&self) -> &'static str;

    /// Performs exactly one network request for the scenario.
    ///
    /// # Errors
    ///
    /// Returns a `RequestError` when the transport fails, the server
    /// responds with a non-success status, or the response fails the
    /// protocol-level checks.
    async fn execute(&self, scenario: &Scenario) -> Result<Sample, RequestError>;
}

/// Builds the pooled client a strategy reuses for every trial in a run.
/// Reconnecting per call would fold connection setup into the latency
/// numbers.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, SetupError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| SetupError::BuildClient { source })
}
