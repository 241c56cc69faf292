use std::io::Write as _;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};

use super::loader::load_config_file;
use super::*;
use crate::args::HarnessArgs;
use crate::error::AppResult;

fn parse_with_matches<const N: usize>(
    argv: [&str; N],
) -> AppResult<(HarnessArgs, clap::ArgMatches)> {
    let matches = HarnessArgs::command().try_get_matches_from(argv)?;
    let args = HarnessArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn write_config(contents: &str, ext: &str) -> Result<(tempfile::TempDir, std::path::PathBuf), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join(format!("apibench.{}", ext));
    let mut file =
        std::fs::File::create(&path).map_err(|err| format!("create failed: {}", err))?;
    file.write_all(contents.as_bytes())
        .map_err(|err| format!("write failed: {}", err))?;
    Ok((dir, path))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let (_dir, path) = write_config(
        r#"
rest_base_url = "http://localhost:8080/api"
graphql_endpoint = "http://localhost:8080/graphql"
iterations = 10
timeout = "5s"
results_dir = "./bench-results"
"#,
        "toml",
    )?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    assert_eq!(
        config.rest_base_url.as_deref(),
        Some("http://localhost:8080/api")
    );
    assert_eq!(
        config.graphql_endpoint.as_deref(),
        Some("http://localhost:8080/graphql")
    );
    assert_eq!(config.iterations, Some(10));
    assert_eq!(config.timeout.as_deref(), Some("5s"));
    assert_eq!(config.results_dir.as_deref(), Some("./bench-results"));
    assert!(config.scenario.is_none(), "Expected no scenario filter");
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let (_dir, path) = write_config(r#"{ "iterations": 3, "scenario": "simple_user" }"#, "json")?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    assert_eq!(config.iterations, Some(3));
    assert_eq!(config.scenario.as_deref(), Some("simple_user"));
    Ok(())
}

#[test]
fn load_config_rejects_unknown_extension() -> Result<(), String> {
    let (_dir, path) = write_config("iterations = 3", "yaml")?;
    assert!(
        load_config_file(&path).is_err(),
        "Expected unsupported extension to be rejected"
    );
    Ok(())
}

#[test]
fn apply_config_fills_defaults() -> AppResult<()> {
    let (mut args, matches) = parse_with_matches(["apibench"])?;
    let config = ConfigFile {
        rest_base_url: Some("http://localhost:9000/api".to_owned()),
        graphql_endpoint: Some("http://localhost:9000/graphql".to_owned()),
        iterations: Some(7),
        timeout: Some("2s".to_owned()),
        results_dir: Some("./out".to_owned()),
        scenario: Some("user_with_posts".to_owned()),
    };

    apply_config(&mut args, &matches, &config)?;

    assert_eq!(args.rest_base_url, "http://localhost:9000/api");
    assert_eq!(args.graphql_endpoint, "http://localhost:9000/graphql");
    assert_eq!(args.iterations.get(), 7);
    assert_eq!(args.timeout, Duration::from_secs(2));
    assert_eq!(args.results_dir, "./out");
    assert_eq!(args.scenario.as_deref(), Some("user_with_posts"));
    Ok(())
}

#[test]
fn apply_config_keeps_cli_values() -> AppResult<()> {
    let (mut args, matches) =
        parse_with_matches(["apibench", "-n", "5", "--results-dir", "./cli-out"])?;
    let config = ConfigFile {
        iterations: Some(7),
        results_dir: Some("./config-out".to_owned()),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, &config)?;

    assert_eq!(args.iterations.get(), 5);
    assert_eq!(args.results_dir, "./cli-out");
    Ok(())
}

#[test]
fn apply_config_rejects_zero_iterations() -> AppResult<()> {
    let (mut args, matches) = parse_with_matches(["apibench"])?;
    let config = ConfigFile {
        iterations: Some(0),
        ..ConfigFile::default()
    };

    assert!(
        apply_config(&mut args, &matches, &config).is_err(),
        "Expected zero iterations to be rejected"
    );
    Ok(())
}

#[test]
fn apply_config_rejects_bad_timeout() -> AppResult<()> {
    let (mut args, matches) = parse_with_matches(["apibench"])?;
    let config = ConfigFile {
        timeout: Some("soon".to_owned()),
        ..ConfigFile::default()
    };

    assert!(
        apply_config(&mut args, &matches, &config).is_err(),
        "Expected invalid timeout to be rejected"
    );
    Ok(())
}
