use crate::{error::AquaguardError, evaluator::SampleReport, formatter::format_value};
use aquaguard_schemas::{
    file_formats::{SampleFile, SCHEMA_VERSION},
    reading::SensorSample,
};
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::{fs, path::Path};
use tracing::info;

const ALERT_HEADER: [&str; 7] = [
    "sample_id",
    "parameter",
    "direction",
    "actual",
    "bound",
    "unit",
    "message",
];

#[derive(Debug, Serialize)]
struct AlertRow<'a> {
    sample_id: &'a str,
    parameter: &'a str,
    direction: &'a str,
    actual: String,
    bound: String,
    unit: &'a str,
    message: String,
}

/// Appends one CSV row per alert. The header is written up front, so a run
/// without alerts still leaves a well-formed file.
pub struct AlertLogger {
    writer: Writer<fs::File>,
    path: String,
    rows: usize,
}

impl AlertLogger {
    pub fn new(path: &Path) -> Result<Self, AquaguardError> {
        let display = path.display().to_string();
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| AquaguardError::CsvError(display.clone(), e))?;
        writer
            .write_record(ALERT_HEADER)
            .map_err(|e| AquaguardError::CsvError(display.clone(), e))?;
        writer
            .flush()
            .map_err(|e| AquaguardError::FileIO(display.clone(), e))?;
        Ok(Self {
            writer,
            path: display,
            rows: 0,
        })
    }

    pub fn log_report(&mut self, report: &SampleReport) -> Result<(), AquaguardError> {
        for alert in &report.alerts {
            let row = AlertRow {
                sample_id: &report.sample_id,
                parameter: alert.parameter.key(),
                direction: alert.direction.phrase(),
                actual: format_value(alert.actual),
                bound: format_value(alert.bound),
                unit: alert.parameter.unit(),
                message: alert.message(),
            };
            self.writer
                .serialize(row)
                .map_err(|e| AquaguardError::CsvError(self.path.clone(), e))?;
            self.rows += 1;
        }
        self.writer
            .flush()
            .map_err(|e| AquaguardError::FileIO(self.path.clone(), e))?;
        Ok(())
    }

    /// Number of alert rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    species: &'a str,
    generated_at: String,
    samples: usize,
    samples_with_alerts: usize,
    total_alerts: usize,
    reports: &'a [SampleReport],
}

pub fn write_json_report(
    path: &Path,
    species: &str,
    reports: &[SampleReport],
) -> Result<(), AquaguardError> {
    let document = JsonReport {
        species,
        generated_at: chrono::Utc::now().to_rfc3339(),
        samples: reports.len(),
        samples_with_alerts: reports.iter().filter(|r| !r.is_clear()).count(),
        total_alerts: reports.iter().map(|r| r.alerts.len()).sum(),
        reports,
    };
    let display = path.display().to_string();
    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| AquaguardError::Json(display.clone(), e))?;
    fs::write(path, json).map_err(|e| AquaguardError::FileIO(display, e))?;
    info!(path = %path.display(), reports = reports.len(), "wrote JSON report");
    Ok(())
}

/// Writes samples as `.csv` or as a `.json` sample file, chosen by extension.
pub fn write_samples(
    path: &Path,
    species: &str,
    samples: &[SensorSample],
) -> Result<(), AquaguardError> {
    let display = path.display().to_string();
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let mut writer =
                Writer::from_path(path).map_err(|e| AquaguardError::CsvError(display.clone(), e))?;
            writer
                .write_record(["sample_id", "temperature", "ph", "dissolved_oxygen"])
                .map_err(|e| AquaguardError::CsvError(display.clone(), e))?;
            for sample in samples {
                let reading = &sample.reading;
                writer
                    .write_record([
                        sample.sample_id.clone().unwrap_or_default(),
                        format_value(reading.temperature()),
                        format_value(reading.ph()),
                        format_value(reading.dissolved_oxygen()),
                    ])
                    .map_err(|e| AquaguardError::CsvError(display.clone(), e))?;
            }
            writer.flush().map_err(|e| AquaguardError::FileIO(display, e))?;
        }
        Some("json") => {
            let file = SampleFile {
                schema_version: SCHEMA_VERSION,
                species,
                readings: samples,
            };
            let json = serde_json::to_string_pretty(&file)
                .map_err(|e| AquaguardError::Json(display.clone(), e))?;
            fs::write(path, json).map_err(|e| AquaguardError::FileIO(display, e))?;
        }
        _ => return Err(AquaguardError::UnsupportedFormat(display)),
    }
    info!(path = %path.display(), samples = samples.len(), "wrote samples");
    Ok(())
}
