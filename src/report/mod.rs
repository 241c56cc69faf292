//! End-of-run aggregation and durable CSV output.

mod export;
mod summary;


pub use export::{CSV_HEADER, export_csv, results_file_name};
pub use summary::{GroupSummary, StatBlock, print_summary, summarize};
