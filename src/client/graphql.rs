use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::time::Instant;
use url::Url;

use crate::error::{RequestError, SetupError};
use crate::scenarios::Scenario;

use super::{RequestStrategy, Sample, build_client};

pub const GRAPHQL_TREATMENT: &str = "GraphQL";

pub struct GraphQlStrategy {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl GraphQlStrategy {
    /// Creates a GraphQL strategy with a persistent client for the run.
    ///
    /// # Errors
    ///
    /// Returns a `SetupError` when the endpoint URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SetupError> {
        Url::parse(endpoint).map_err(|source| SetupError::InvalidGraphQlEndpoint {
            url: endpoint.to_owned(),
            source,
        })?;
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: endpoint.to_owned(),
            timeout,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    #[serde(default)]
    message: String,
}

/// Rejects responses that signal execution failure despite HTTP success:
/// a populated `errors` array, or a missing/null `data` field.
pub(super) fn check_envelope(body: &[u8]) -> Result<(), RequestError> {
    let envelope: GraphQlEnvelope = serde_json::from_slice(body)
        .map_err(|source| RequestError::DecodeEnvelope { source })?;

    if let Some(errors) = envelope.errors
        && !errors.is_empty()
    {
        return Err(RequestError::GraphQlErrors {
            messages: errors.into_iter().map(|entry| entry.message).collect(),
        });
    }

    match envelope.data {
        Some(data) if !data.is_null() => Ok(()),
        _ => Err(RequestError::MissingData),
    }
}

#[async_trait]
impl RequestStrategy for GraphQlStrategy {
    fn treatment(&self) -> &'static str {
        GRAPHQL_TREATMENT
    }

    async fn execute(&self, scenario: &Scenario) -> Result<Sample, RequestError> {
        let mut body = serde_json::json!({ "query": scenario.graphql.query });
        if !scenario.graphql.variables.is_null() {
            body["variables"] = scenario.graphql.variables.clone();
        }
        let request = self.client.post(&self.endpoint).json(&body);

        let started = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|err| RequestError::from_reqwest(err, self.timeout))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| RequestError::from_reqwest(err, self.timeout))?;
        let elapsed = started.elapsed();

        if !status.is_success() {
            return Err(RequestError::UnexpectedStatus { status });
        }
        check_envelope(&bytes)?;

        Ok(Sample {
            response_time_ms: elapsed.as_secs_f64() * 1000.0,
            response_size_bytes: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
        })
    }
}
