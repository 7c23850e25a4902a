//! advent - Command-line runner for the Advent of Code 2023 solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod logging;
mod output;

// Link the 2023 solutions so their plugins are collected
use advent_2023 as _;

use advent_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logging::init(config.log_filter())?;

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        return Err(CliError::Config(
            "no solvers match the specified filters".to_string(),
        ));
    }
    warn_missing_inputs(&executor, &work_items);

    run_executor(&executor, config.quiet)
}

/// Log which inputs are absent before any solver runs
fn warn_missing_inputs(executor: &Executor, work_items: &[WorkItem]) {
    for work in work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.year, w.day))
    {
        tracing::warn!(
            year = work.year,
            day = work.day,
            path = %executor.inputs().input_path(work.year, work.day).display(),
            "input file not found"
        );
    }
}

/// Run the executor, print results as they arrive, then the summary
fn run_executor(executor: &Executor, quiet: bool) -> Result<(), CliError> {
    let formatter = OutputFormatter::new(quiet);
    let mut results = Vec::new();

    let outcome = executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });

    formatter.print_summary(&results);
    outcome?;

    let failed = results.iter().filter(|r| r.answer.is_err()).count();
    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
