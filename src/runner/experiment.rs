use tracing::info;

use crate::client::RequestStrategy;
use crate::metrics::RecordSet;
use crate::scenarios::Scenario;

use super::trial::run_trial;

/// Executes the full cross-product of scenario x iteration x strategy,
/// strictly sequentially, and returns the accumulated record set.
///
/// Nesting order is scenario (declaration order), then iteration 1..=N,
/// then strategy (declared order), so iteration i always means the i-th
/// call of every strategy for that scenario, run back to back. The loop
/// owns the record set exclusively until it returns; records appear in
/// exactly the order trials were attempted.
pub async fn run_experiment_loop(
    scenarios: &[Scenario],
    iterations: u32,
    strategies: &[Box<dyn RequestStrategy>],
) -> RecordSet {
    let mut records = RecordSet::new();

    for scenario in scenarios {
        info!("Scenario: {} - {}", scenario.name, scenario.description);
        for iteration in 1..=iterations {
            for strategy in strategies {
                if let Some(record) = run_trial(strategy.as_ref(), scenario, iteration).await {
                    records.push(record);
                }
            }
        }
    }

    records
}
