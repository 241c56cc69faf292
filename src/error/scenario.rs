use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Unknown scenario '{name}'.")]
    NotFound { name: String },
}
