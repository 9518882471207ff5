//! Headless driver for the MLFQ simulator
//!
//! Usage: `mlfq-sim <config.json> [max_ticks] [--json]`
//!
//! Loads and validates a scheduler configuration, runs it until every
//! process has completed (or `max_ticks` elapse) and prints the completed
//! process table with summary metrics. `--json` prints the final snapshot
//! instead. Set `RUST_LOG=debug` to trace dispatches and preemptions.

use mlfq_simulator_core_rs::scheduler::{ConfigError, Scheduler, SchedulerConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_MAX_TICKS: usize = 10_000;

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: mlfq-sim <config.json> [max_ticks] [--json]")]
    Usage,

    #[error("invalid tick budget '{0}'")]
    InvalidTicks(String),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

struct Args {
    config_path: PathBuf,
    max_ticks: usize,
    json: bool,
}

fn parse_args(raw: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut positional = Vec::new();
    let mut json = false;
    for arg in raw {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let config_path = positional.next().map(PathBuf::from).ok_or(CliError::Usage)?;
    let max_ticks = match positional.next() {
        Some(raw) => raw.parse().map_err(|_| CliError::InvalidTicks(raw))?,
        None => DEFAULT_MAX_TICKS,
    };
    if positional.next().is_some() {
        return Err(CliError::Usage);
    }

    Ok(Args {
        config_path,
        max_ticks,
        json,
    })
}

fn load_config(path: &Path) -> Result<SchedulerConfig, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn print_report(scheduler: &Scheduler) {
    println!("Levels:");
    for (index, policy) in scheduler.level_policies().iter().enumerate() {
        println!("  {}: {}", index, policy);
    }
    println!();

    println!(
        "{:>5} {:>8} {:>6} {:>11} {:>11} {:>8}",
        "PID", "Arrival", "Burst", "Completion", "Turnaround", "Waiting"
    );
    for process in scheduler.completed() {
        if let Some(stats) = process.completion() {
            println!(
                "{:>5} {:>8} {:>6} {:>11} {:>11} {:>8}",
                process.id(),
                process.arrival_time(),
                process.burst_time(),
                stats.completion_time,
                stats.turnaround_time,
                stats.waiting_time
            );
        }
    }
    println!();

    let summary = scheduler.metrics().summary(scheduler.current_time());
    println!("Time:               {}", scheduler.current_time());
    println!(
        "Completed:          {} of {} (cap {})",
        summary.completed,
        scheduler.generated_count(),
        scheduler.population_cap()
    );
    if let (Some(turnaround), Some(waiting)) = (summary.average_turnaround, summary.average_waiting)
    {
        println!("Average turnaround: {:.2}", turnaround);
        println!("Average waiting:    {:.2}", waiting);
    }
    println!("Throughput:         {:.4} per tick", summary.throughput);
    if !scheduler.is_finished() {
        println!(
            "Unfinished:         {} waiting, {} running",
            scheduler.queues().total_waiting(),
            usize::from(scheduler.running().is_some())
        );
    }
}

fn run() -> Result<(), CliError> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(&args.config_path)?;
    let mut scheduler = Scheduler::from_config(&config)?;

    let executed = scheduler.run(args.max_ticks);
    info!(
        ticks = executed,
        finished = scheduler.is_finished(),
        "simulation stopped"
    );

    if args.json {
        println!("{}", scheduler.snapshot().to_json()?);
    } else {
        print_report(&scheduler);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
