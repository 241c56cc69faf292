//! The normalized measurement record accumulated by the experiment loop.


use serde::Serialize;

use crate::client::Sample;

/// Ordered sequence of all records produced during a run, in exactly the
/// order the trials were attempted.
pub type RecordSet = Vec<MetricRecord>;

/// One successful trial, flattened for aggregation and CSV export.
/// Records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord {
    pub scenario: String,
    pub treatment: String,
    pub iteration: u32,
    pub response_time_ms: f64,
    pub response_size_bytes: u64,
}

impl MetricRecord {
    /// Pure record factory; identical inputs always yield identical
    /// records.
    #[must_use]
    pub fn new(scenario: &str, treatment: &str, iteration: u32, sample: Sample) -> Self {
        debug_assert!(
            sample.response_time_ms >= 0.0,
            "negative elapsed time indicates a measurement bug"
        );
        debug_assert!(iteration >= 1, "iterations are 1-based");
        Self {
            scenario: scenario.to_owned(),
            treatment: treatment.to_owned(),
            iteration,
            response_time_ms: sample.response_time_ms,
            response_size_bytes: sample.response_size_bytes,
        }
    }
}
