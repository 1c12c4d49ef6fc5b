use std::env::var;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result as EyreResult, WrapErr};
use mlfq_simulator_core_rs::{Scheduler, SchedulerConfig};
use tracing::info;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{registry, EnvFilter};

mod input;

use input::parse_processes;

/// Multilevel feedback queue scheduling simulator
///
/// Reads one `pid,priority,burst` triple per line and prints the total
/// elapsed time once every process has finished.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Process list file (reads stdin when omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// JSON scheduler config; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of priority queues
    #[arg(long, short)]
    queues: Option<usize>,

    /// CPU units granted per slice
    #[arg(long, allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// Aging period of the global clock
    #[arg(long, allow_negative_numbers = true)]
    age_threshold: Option<i64>,

    /// Print the full run summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> EyreResult<()> {
    let cli = Cli::parse();
    setup(cli.verbose)?;

    let config = resolve_config(&cli)?;
    let text = read_input(cli.input.as_ref())?;
    println!("{}", simulate(&config, &text, cli.json)?);

    Ok(())
}

/// Load every line of `text` into a fresh scheduler, run it, and render
/// either the total or the JSON summary
fn simulate(config: &SchedulerConfig, text: &str, json: bool) -> EyreResult<String> {
    let mut scheduler = Scheduler::from_config(config)?;

    for line in parse_processes(text)? {
        scheduler
            .submit(line.pid, line.priority, line.burst_time)
            .wrap_err_with(|| format!("line {}", line.line))?;
    }
    info!(processes = scheduler.pending_count(), "workload loaded");

    let total = scheduler.run();

    if json {
        Ok(serde_json::to_string_pretty(&scheduler.summary())?)
    } else {
        Ok(format!("Total time elapsed: {}", total))
    }
}

fn setup(verbose: u8) -> EyreResult<()> {
    let directives = match var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => match verbose {
            0 => "warn".to_owned(),
            1 => "info".to_owned(),
            2 => "debug".to_owned(),
            _ => "trace".to_owned(),
        },
    };

    registry()
        .with(EnvFilter::builder().parse(directives)?)
        .with(layer().with_writer(io::stderr))
        .init();

    color_eyre::install()?;

    Ok(())
}

fn resolve_config(cli: &Cli) -> EyreResult<SchedulerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
            SchedulerConfig::from_json(&json)?
        }
        None => SchedulerConfig::default(),
    };

    if let Some(queues) = cli.queues {
        config.num_queues = queues;
    }
    if let Some(quantum) = cli.quantum {
        config.time_quantum = quantum;
    }
    if let Some(age_threshold) = cli.age_threshold {
        config.age_threshold = age_threshold;
    }

    config.validate()?;
    Ok(config)
}

fn read_input(path: Option<&PathBuf>) -> EyreResult<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read process list {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .wrap_err("failed to read process list from stdin")?;
            Ok(text)
        }
    }
}
