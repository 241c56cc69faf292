use std::time::Duration;

use super::graphql::check_envelope;
use super::rest::join_endpoint;
use super::*;
use crate::error::{FailureKind, RequestError};

#[test]
fn join_endpoint_normalises_slashes() {
    assert_eq!(
        join_endpoint("http://localhost:3000/api", "/users/1"),
        "http://localhost:3000/api/users/1"
    );
    assert_eq!(
        join_endpoint("http://localhost:3000/api/", "users/1"),
        "http://localhost:3000/api/users/1"
    );
    assert_eq!(
        join_endpoint("http://localhost:3000/api/", "/users/1"),
        "http://localhost:3000/api/users/1"
    );
}

#[test]
fn check_envelope_accepts_populated_data() {
    let body = br#"{ "data": { "user": { "id": "1" } } }"#;
    assert!(check_envelope(body).is_ok());
}

#[test]
fn check_envelope_rejects_execution_errors() {
    let body = br#"{ "data": null, "errors": [{ "message": "boom" }] }"#;
    let result = check_envelope(body);
    assert!(
        matches!(result, Err(RequestError::GraphQlErrors { ref messages }) if messages == &["boom"]),
        "Expected GraphQlErrors"
    );
}

#[test]
fn check_envelope_rejects_missing_data() {
    for body in [
        br#"{ "errors": [] }"#.as_slice(),
        br#"{ "data": null }"#.as_slice(),
        br"{}".as_slice(),
    ] {
        assert!(
            matches!(check_envelope(body), Err(RequestError::MissingData)),
            "Expected MissingData for {}",
            String::from_utf8_lossy(body)
        );
    }
}

#[test]
fn check_envelope_rejects_invalid_json() {
    assert!(matches!(
        check_envelope(b"not json"),
        Err(RequestError::DecodeEnvelope { .. })
    ));
}

#[test]
fn failure_kinds_follow_the_taxonomy() {
    let timeout = RequestError::Timeout {
        timeout: Duration::from_secs(30),
    };
    assert_eq!(timeout.kind(), FailureKind::Transport);

    let status = RequestError::UnexpectedStatus {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    };
    assert_eq!(status.kind(), FailureKind::Protocol);

    let missing = RequestError::MissingData;
    assert_eq!(missing.kind(), FailureKind::Protocol);

    let graphql = RequestError::GraphQlErrors {
        messages: vec!["boom".to_owned()],
    };
    assert_eq!(graphql.kind(), FailureKind::Protocol);
}

#[test]
fn strategies_report_fixed_treatments() -> Result<(), String> {
    let rest = RestStrategy::new("http://localhost:3000/api", Duration::from_secs(1))
        .map_err(|err| err.to_string())?;
    assert_eq!(rest.treatment(), "REST");

    let graphql = GraphQlStrategy::new("http://localhost:3000/graphql", Duration::from_secs(1))
        .map_err(|err| err.to_string())?;
    assert_eq!(graphql.treatment(), "GraphQL");
    Ok(())
}

#[test]
fn strategies_reject_invalid_urls() {
    assert!(RestStrategy::new("not a url", Duration::from_secs(1)).is_err());
    assert!(GraphQlStrategy::new("not a url", Duration::from_secs(1)).is_err());
}
