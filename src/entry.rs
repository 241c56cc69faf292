use std::path::PathBuf;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::info;

use crate::args::{Command, HarnessArgs};
use crate::client::{GraphQlStrategy, RequestStrategy, RestStrategy};
use crate::error::{AppError, AppResult, SetupError};
use crate::{config, report, runner, scenarios};

/// Parses arguments, initializes logging, and performs one full
/// experiment run. Exit is non-zero only for setup or export failures;
/// individual trial failures never affect the exit status.
pub fn run() -> AppResult<()> {
    let matches = HarnessArgs::command().get_matches();
    let args = HarnessArgs::from_arg_matches(&matches)?;

    crate::logger::init_logging(args.verbose);

    if let Some(Command::Scenarios) = args.command {
        list_scenarios();
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_experiment(args, &matches))
}

fn list_scenarios() {
    for scenario in scenarios::all() {
        println!("{:<22} {}", scenario.name, scenario.description);
    }
}

async fn run_experiment(mut args: HarnessArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = config::load_config(args.config.as_deref())? {
        config::apply_config(&mut args, matches, &config)?;
    }

    let scenario_set = match args.scenario.as_deref() {
        Some(name) => vec![scenarios::find(name)?],
        None => scenarios::all(),
    };

    let results_dir = PathBuf::from(&args.results_dir);
    std::fs::create_dir_all(&results_dir).map_err(|source| {
        AppError::setup(SetupError::CreateResultsDir {
            path: results_dir.clone(),
            source,
        })
    })?;

    // Fixed strategy order: iteration i is always the i-th REST call and
    // the i-th GraphQL call, back to back.
    let strategies: Vec<Box<dyn RequestStrategy>> = vec![
        Box::new(RestStrategy::new(&args.rest_base_url, args.timeout)?),
        Box::new(GraphQlStrategy::new(&args.graphql_endpoint, args.timeout)?),
    ];

    let started_at = chrono::Local::now();
    info!("Starting REST vs GraphQL experiment");
    info!("Iterations per scenario: {}", args.iterations);
    info!("REST base URL: {}", args.rest_base_url);
    info!("GraphQL endpoint: {}", args.graphql_endpoint);
    info!("Scenarios: {}", scenario_set.len());

    let records =
        runner::run_experiment_loop(&scenario_set, args.iterations.get(), &strategies).await;

    info!("Experiment finished. Collected measurements: {}", records.len());

    report::print_summary(&report::summarize(&records));

    let output_path = results_dir.join(report::results_file_name(&started_at));
    report::export_csv(&output_path, &records).await?;
    info!("Results saved to {}", output_path.display());

    // Dropping the strategies releases their pooled connections.
    drop(strategies);
    Ok(())
}
