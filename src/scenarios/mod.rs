//! Scenario definitions: named pairs of equivalent REST and GraphQL
//! requests used as experimental conditions.

mod builtin;


use serde_json::Value;

use crate::error::ScenarioError;

pub use builtin::all;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// The REST half of a scenario: request shape relative to the configured
/// base URL.
#[derive(Debug, Clone)]
pub struct RestSpec {
    pub method: HttpMethod,
    pub path: String,
    pub params: Vec<(String, String)>,
}

/// The GraphQL half of a scenario: a query document plus its variables.
#[derive(Debug, Clone)]
pub struct GraphQlSpec {
    pub query: String,
    pub variables: Value,
}

/// One experimental condition. Names are unique across the scenario set
/// and serve as the grouping key for aggregation.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub rest: RestSpec,
    pub graphql: GraphQlSpec,
}

/// Looks up a builtin scenario by name.
///
/// # Errors
///
/// Returns `ScenarioError::NotFound` when no scenario has the given name.
pub fn find(name: &str) -> Result<Scenario, ScenarioError> {
    all()
        .into_iter()
        .find(|scenario| scenario.name == name)
        .ok_or_else(|| ScenarioError::NotFound {
            name: name.to_owned(),
        })
}
