use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures raised before any trial executes.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to create results directory '{path}': {source}")]
    CreateResultsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid REST base URL '{url}': {source}")]
    InvalidRestBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid GraphQL endpoint '{url}': {source}")]
    InvalidGraphQlEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
