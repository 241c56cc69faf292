use tracing::{error, info};

use crate::client::RequestStrategy;
use crate::metrics::MetricRecord;
use crate::scenarios::Scenario;

/// Runs one trial: invokes the strategy exactly once and converts the
/// outcome into either a record or a logged error.
///
/// This is the sole failure-isolation boundary. Strategy failures are
/// logged with their kind and cause and swallowed here; a failed trial
/// must never abort the run.
pub async fn run_trial(
    strategy: &dyn RequestStrategy,
    scenario: &Scenario,
    iteration: u32,
) -> Option<MetricRecord> {
    match strategy.execute(scenario).await {
        Ok(sample) => {
            info!(
                "Completed trial - scenario: {}, treatment: {}, iteration: {}, time: {:.2}ms, size: {} bytes",
                scenario.name,
                strategy.treatment(),
                iteration,
                sample.response_time_ms,
                sample.response_size_bytes
            );
            Some(MetricRecord::new(
                &scenario.name,
                strategy.treatment(),
                iteration,
                sample,
            ))
        }
        Err(err) => {
            error!(
                "Trial failed - scenario: {}, treatment: {}, iteration: {}, kind: {}, cause: {}",
                scenario.name,
                strategy.treatment(),
                iteration,
                err.kind(),
                err
            );
            None
        }
    }
}
