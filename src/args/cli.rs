use clap::{Parser, Subcommand};
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_positive_u32};
use super::types::PositiveU32;

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List the builtin benchmark scenarios
    Scenarios,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Sequential benchmarking harness comparing latency and payload size of equivalent REST and GraphQL requests."
)]
pub struct HarnessArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL for REST requests
    #[arg(long = "rest-base-url", default_value = "http://localhost:3000/api")]
    pub rest_base_url: String,

    /// GraphQL endpoint URL
    #[arg(long = "graphql-endpoint", default_value = "http://localhost:3000/graphql")]
    pub graphql_endpoint: String,

    /// Number of iterations per scenario
    #[arg(
        long,
        short = 'n',
        default_value = "30",
        value_parser = parse_positive_u32
    )]
    pub iterations: PositiveU32,

    /// Per-request timeout (supports ms/s/m/h, plain numbers are seconds)
    #[arg(long, default_value = "30s", value_parser = parse_duration_arg)]
    pub timeout: Duration,

    /// Directory the timestamped CSV results file is written to
    #[arg(long = "results-dir", default_value = "./results")]
    pub results_dir: String,

    /// Run only the named scenario
    #[arg(long)]
    pub scenario: Option<String>,

    /// Path to a config file (.toml or .json)
    #[arg(long, short = 'c', env = "APIBENCH_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
