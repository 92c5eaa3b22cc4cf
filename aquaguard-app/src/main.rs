use anyhow::Result;
use aquaguard_schemas::species::Species;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod workflow;

use crate::config::RunConfig;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "aquaguard_app=info,aquaguard_core=info,aquaguard_schemas=info";

/// Exit status of `check` when at least one alert fires.
const ALERT_EXIT_CODE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "aquaguard", version, about = "Water-quality alerts for farmed fish")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one reading
    Check {
        #[arg(long)]
        species: Species,
        /// Water temperature in °C
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        #[arg(long, allow_negative_numbers = true)]
        ph: f64,
        /// Dissolved oxygen in mg/L
        #[arg(long, allow_negative_numbers = true)]
        dissolved_oxygen: f64,
    },
    /// Evaluate every reading in a JSON or CSV file
    Batch {
        #[arg(long)]
        species: Species,
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "./data/runs")]
        output_dir: PathBuf,
    },
    /// Run a batch described by a YAML config file
    Run {
        #[arg(long)]
        config: PathBuf,
    },
    /// Print the threshold table of every registered species
    Species,
    /// Write a generated set of test readings for a species
    Sample {
        #[arg(long)]
        species: Species,
        /// Output file, `.json` or `.csv`
        #[arg(long)]
        output: PathBuf,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            species,
            temperature,
            ph,
            dissolved_oxygen,
        } => {
            let alerts = workflow::check_reading(species, temperature, ph, dissolved_oxygen)?;
            if alerts.is_empty() {
                println!("{}: all parameters within safe range", species);
                return Ok(ExitCode::SUCCESS);
            }
            for alert in &alerts {
                println!("{}", alert);
            }
            Ok(ExitCode::from(ALERT_EXIT_CODE))
        }
        Command::Batch {
            species,
            input,
            output_dir,
        } => {
            let config = RunConfig {
                species: species.id().to_string(),
                input,
                output_dir,
                write_csv: true,
                write_json: true,
            };
            let output = workflow::run_batch(&config, None)?;
            println!("\nBatch complete. Results are in {:?}", output.run_dir);
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { config } => {
            let run_config = RunConfig::load(&config)?;
            let output = workflow::run_batch(&run_config, Some(&config))?;
            println!("\nRun complete. Results are in {:?}", output.run_dir);
            Ok(ExitCode::SUCCESS)
        }
        Command::Species => {
            print!("{}", workflow::species_table());
            Ok(ExitCode::SUCCESS)
        }
        Command::Sample { species, output } => {
            let count = workflow::write_sample_file(species, &output)?;
            println!("Wrote {} {} samples to {:?}", count, species, output);
            Ok(ExitCode::SUCCESS)
        }
    }
}
