use std::time::Duration;

use thiserror::Error;

/// Closed classification the trial runner logs failed trials by.
///
/// Transport failures never reached the server or never got a complete
/// response back; protocol failures are well-formed responses the strategy
/// refuses to count as a successful trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Protocol,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Protocol => write!(f, "protocol"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Request timed out after {timeout:?}.")]
    Timeout { timeout: Duration },
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected status {status}.")]
    UnexpectedStatus { status: reqwest::StatusCode },
    #[error("GraphQL response is not valid JSON: {source}")]
    DecodeEnvelope {
        #[source]
        source: serde_json::Error,
    },
    #[error("GraphQL execution errors: {}", .messages.join("; "))]
    GraphQlErrors { messages: Vec<String> },
    #[error("GraphQL response has no data field.")]
    MissingData,
}

impl RequestError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            RequestError::Timeout { .. } | RequestError::Transport { .. } => {
                FailureKind::Transport
            }
            RequestError::UnexpectedStatus { .. }
            | RequestError::DecodeEnvelope { .. }
            | RequestError::GraphQlErrors { .. }
            | RequestError::MissingData => FailureKind::Protocol,
        }
    }

    /// Maps a reqwest send/read error, folding timeouts into their own
    /// variant so the log line can name the configured limit.
    pub(crate) fn from_reqwest(source: reqwest::Error, timeout: Duration) -> Self {
        if source.is_timeout() {
            RequestError::Timeout { timeout }
        } else {
            RequestError::Transport { source }
        }
    }
}
