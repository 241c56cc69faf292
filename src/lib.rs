//! Core library for the `apibench` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI
//! argument types, configuration parsing, the two request strategies, the
//! sequential trial runner, metric records, and end-of-run aggregation and
//! CSV export. The primary user-facing interface is the `apibench`
//! command-line application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod client;
pub mod config;
pub mod entry;
pub mod error;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod scenarios;

mod logger;
