use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::Instant;
use url::Url;

use crate::error::{RequestError, SetupError};
use crate::scenarios::Scenario;

use super::{RequestStrategy, Sample, build_client};

pub const REST_TREATMENT: &str = "REST";

pub struct RestStrategy {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RestStrategy {
    /// Creates a REST strategy with a persistent client for the run.
    ///
    /// # Errors
    ///
    /// Returns a `SetupError` when the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SetupError> {
        Url::parse(base_url).map_err(|source| SetupError::InvalidRestBaseUrl {
            url: base_url.to_owned(),
            source,
        })?;
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout,
        })
    }

    fn endpoint_url(&self, path: &str) -> String {
        join_endpoint(&self.base_url, path)
    }
}

pub(super) fn join_endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[async_trait]
impl RequestStrategy for RestStrategy {
    fn treatment(&self) -> &'static str {
        REST_TREATMENT
    }

    async fn execute(&self, scenario: &Scenario) -> Result<Sample, RequestError> {
        let mut request = self.client.request(
            scenario.rest.method.as_reqwest(),
            self.endpoint_url(&scenario.rest.path),
        );
        if !scenario.rest.params.is_empty() {
            request = request.query(&scenario.rest.params);
        }

        let started = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|err| RequestError::from_reqwest(err, self.timeout))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| RequestError::from_reqwest(err, self.timeout))?;
        let elapsed = started.elapsed();

        if !status.is_success() {
            return Err(RequestError::UnexpectedStatus { status });
        }

        Ok(Sample {
            response_time_ms: elapsed.as_secs_f64() * 1000.0,
            response_size_bytes: u64::try_from(body.len()).unwrap_or(u64::MAX),
        })
    }
}
