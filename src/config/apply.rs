use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{HarnessArgs, PositiveU32, parse_duration_value};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the
/// command line always win over the config file.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut HarnessArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "rest_base_url")
        && let Some(url) = config.rest_base_url.clone()
    {
        args.rest_base_url = url;
    }

    if !is_cli(matches, "graphql_endpoint")
        && let Some(url) = config.graphql_endpoint.clone()
    {
        args.graphql_endpoint = url;
    }

    if !is_cli(matches, "iterations")
        && let Some(iterations) = config.iterations
    {
        args.iterations = PositiveU32::try_from(iterations).map_err(|err| {
            AppError::config(ConfigError::FieldMustBePositive {
                field: "iterations",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout.as_deref()
    {
        args.timeout = parse_duration_value(timeout)
            .map_err(|err| AppError::config(ConfigError::InvalidTimeout { source: err }))?;
    }

    if !is_cli(matches, "results_dir")
        && let Some(results_dir) = config.results_dir.clone()
    {
        args.results_dir = results_dir;
    }

    if !is_cli(matches, "scenario")
        && let Some(scenario) = config.scenario.clone()
    {
        args.scenario = Some(scenario);
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}
