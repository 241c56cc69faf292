use tracing::info;

use crate::metrics::MetricRecord;

/// Mean, sample standard deviation, and extrema over one measured column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatBlock {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Aggregated statistics for one (scenario, treatment) group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub scenario: String,
    pub treatment: String,
    pub count: usize,
    pub response_time_ms: StatBlock,
    pub response_size_bytes: StatBlock,
}

/// Groups records by (scenario, treatment) in first-appearance order and
/// computes per-group statistics. Pairs with no successful trials are
/// simply absent; an empty record set yields an empty summary.
#[must_use]
pub fn summarize(records: &[MetricRecord]) -> Vec<GroupSummary> {
    let mut groups: Vec<(String, String, Vec<&MetricRecord>)> = Vec::new();
    for record in records {
        let existing = groups
            .iter_mut()
            .find(|(scenario, treatment, _)| {
                scenario == &record.scenario && treatment == &record.treatment
            });
        match existing {
            Some((_, _, members)) => members.push(record),
            None => groups.push((record.scenario.clone(), record.treatment.clone(), vec![record])),
        }
    }

    groups
        .into_iter()
        .map(|(scenario, treatment, members)| {
            let times: Vec<f64> = members
                .iter()
                .map(|record| record.response_time_ms)
                .collect();
            let sizes: Vec<f64> = members
                .iter()
                .map(|record| record.response_size_bytes as f64)
                .collect();
            GroupSummary {
                scenario,
                treatment,
                count: members.len(),
                response_time_ms: stat_block(&times),
                response_size_bytes: stat_block(&sizes),
            }
        })
        .collect()
}

// Sample standard deviation (n - 1 denominator); 0.0 for singleton groups
// so the table never shows NaN.
fn stat_block(values: &[f64]) -> StatBlock {
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let std = if values.len() < 2 {
        0.0
    } else {
        let variance = values
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / (count - 1.0);
        variance.sqrt()
    };
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    StatBlock {
        mean,
        std,
        min,
        max,
    }
}

/// Logs the grouped summary table.
pub fn print_summary(summary: &[GroupSummary]) {
    if summary.is_empty() {
        info!("No successful trials to summarize.");
        return;
    }

    info!("Summary by scenario and treatment:");
    info!(
        "{:<22} {:<9} {:>4} {:>12} {:>11} {:>11} {:>11} {:>13} {:>12}",
        "scenario",
        "treatment",
        "n",
        "time_mean_ms",
        "time_std_ms",
        "time_min_ms",
        "time_max_ms",
        "size_mean_b",
        "size_max_b"
    );
    for group in summary {
        info!(
            "{:<22} {:<9} {:>4} {:>12.2} {:>11.2} {:>11.2} {:>11.2} {:>13.1} {:>12.0}",
            group.scenario,
            group.treatment,
            group.count,
            group.response_time_ms.mean,
            group.response_time_ms.std,
            group.response_time_ms.min,
            group.response_time_ms.max,
            group.response_size_bytes.mean,
            group.response_size_bytes.max
        );
    }
}
