mod app;
mod config;
mod export;
mod request;
mod scenario;
mod setup;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use export::ExportError;
pub use request::{FailureKind, RequestError};
pub use scenario::ScenarioError;
pub use setup::SetupError;
pub use validation::ValidationError;
