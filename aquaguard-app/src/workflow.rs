use crate::config::RunConfig;
use anyhow::{Context, Result};
use aquaguard_core::{
    alert::Alert,
    evaluator::{self, SampleReport},
    export::{self, AlertLogger},
    formatter::format_value,
    input,
    sample,
};
use aquaguard_schemas::{
    reading::Reading,
    species::{Species, ThresholdProfile},
    threshold::Bound,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// What a batch run produced.
#[derive(Debug)]
pub struct RunOutput {
    pub run_dir: PathBuf,
    pub reports: Vec<SampleReport>,
}

/// Validates and evaluates a single reading given on the command line.
pub fn check_reading(
    species: Species,
    temperature: f64,
    ph: f64,
    dissolved_oxygen: f64,
) -> Result<Vec<Alert>> {
    let reading = Reading::new(temperature, ph, dissolved_oxygen).context("Invalid reading")?;
    let alerts = evaluator::evaluate_profile(&reading, &species);
    tracing::info!(species = %species, alerts = alerts.len(), "checked reading");
    Ok(alerts)
}

/// Loads every reading in the configured input, evaluates it, and writes the
/// results into a fresh timestamped directory under `output_dir`.
pub fn run_batch(config: &RunConfig, config_path: Option<&Path>) -> Result<RunOutput> {
    let species = config.species()?;
    println!("\n--- [Workflow] Evaluating {} readings from {:?} ---", species, config.input);

    let samples = input::load_readings(&config.input)
        .with_context(|| format!("Failed to load readings from {:?}", config.input))?;
    let reports = evaluator::evaluate_samples(&samples, &species.thresholds());

    let run_dir = config.output_dir.join(format!(
        "{}_{}",
        species.id(),
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", run_dir))?;

    // Keep the config next to its results for traceability
    if let Some(path) = config_path {
        fs::copy(path, run_dir.join("run.yaml"))
            .with_context(|| format!("Failed to copy config {:?}", path))?;
    }

    if config.write_csv {
        let mut logger = AlertLogger::new(&run_dir.join("alerts.csv"))?;
        for report in &reports {
            logger.log_report(report)?;
        }
        tracing::info!(rows = logger.rows(), "wrote alert log");
    }
    if config.write_json {
        export::write_json_report(&run_dir.join("report.json"), species.name(), &reports)?;
    }

    print_summary_report(species, &reports);
    Ok(RunOutput { run_dir, reports })
}

/// Writes the generated sample set for a species.
pub fn write_sample_file(species: Species, output: &Path) -> Result<usize> {
    let samples = sample::generate_samples(&species);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    export::write_samples(output, species.name(), &samples)?;
    Ok(samples.len())
}

fn bound_text(bound: &Bound, unit: &str) -> String {
    match (bound.minimum, bound.maximum) {
        (Some(min), Some(max)) => format!(
            "{}{} - {}{}",
            format_value(min),
            unit,
            format_value(max),
            unit
        ),
        (Some(min), None) => format!(">= {}{}", format_value(min), unit),
        (None, Some(max)) => format!("<= {}{}", format_value(max), unit),
        (None, None) => "unbounded".to_string(),
    }
}

/// Renders the threshold table of every registered species.
pub fn species_table() -> String {
    let mut table = String::from("| Species | Parameter | Safe range |\n");
    table.push_str("|---------|-----------|------------|\n");
    for species in Species::ALL {
        for (parameter, bound) in species.thresholds().iter() {
            table.push_str(&format!(
                "| {} | {} | {} |\n",
                species.name(),
                parameter.display_name(),
                bound_text(bound, parameter.unit())
            ));
        }
    }
    table
}

fn print_summary_report(species: Species, reports: &[SampleReport]) {
    let flagged: Vec<&SampleReport> = reports.iter().filter(|r| !r.is_clear()).collect();
    let total_alerts: usize = reports.iter().map(|r| r.alerts.len()).sum();

    println!("\n--- [Summary Report: {}] ---", species);
    println!("========================================");
    println!("  - Samples evaluated:   {:>6}", reports.len());
    println!("  - Samples with alerts: {:>6}", flagged.len());
    println!("  - Total alerts:        {:>6}", total_alerts);
    println!("----------------------------------------");
    for report in flagged {
        println!("  {}:", report.sample_id);
        for message in &report.messages {
            println!("    - {}", message);
        }
    }
    println!("========================================");
}
