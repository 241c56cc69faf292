use serde::Deserialize;

/// Optional file-based configuration. Every field mirrors a CLI flag and
/// only applies when the flag was left at its default.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub rest_base_url: Option<String>,
    pub graphql_endpoint: Option<String>,
    pub iterations: Option<u32>,
    pub timeout: Option<String>,
    pub results_dir: Option<String>,
    pub scenario: Option<String>,
}
