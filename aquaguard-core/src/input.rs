//! Input boundary: turns JSON and CSV sensor exports into validated
//! `SensorSample`s. Nothing that fails validation here reaches the evaluator.

use crate::error::AquaguardError;
use aquaguard_schemas::{
    file_formats::ReadingFile,
    parameter::Parameter,
    reading::{Reading, ReadingError, SensorSample},
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::{fs, io::Read, path::Path};
use tracing::{debug, info};

/// Builds a sample from one JSON object. Numbers must be JSON numbers;
/// strings such as `"7.5"` are rejected as non-numeric.
pub fn sample_from_json(record: &Map<String, Value>) -> Result<SensorSample, ReadingError> {
    let reading = Reading::new(
        json_field(record, Parameter::Temperature)?,
        json_field(record, Parameter::Ph)?,
        json_field(record, Parameter::DissolvedOxygen)?,
    )?;
    let sample_id = match record.get("sample_id") {
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    Ok(SensorSample::new(sample_id, reading))
}

fn json_field(record: &Map<String, Value>, parameter: Parameter) -> Result<f64, ReadingError> {
    match record.get(parameter.key()) {
        None | Some(Value::Null) => Err(ReadingError::Missing { field: parameter }),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| ReadingError::NonNumeric {
            field: parameter,
            raw: n.to_string(),
        }),
        Some(other) => Err(ReadingError::NonNumeric {
            field: parameter,
            raw: other.to_string(),
        }),
    }
}

/// Parses a JSON document holding either a bare array of records or a
/// `{ "schema_version": .., "readings": [..] }` wrapper.
pub fn parse_json_readings(text: &str, source: &str) -> Result<Vec<SensorSample>, AquaguardError> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| AquaguardError::Json(source.to_string(), e))?;

    let records = match document {
        Value::Array(records) => records,
        other => {
            let file: ReadingFile = serde_json::from_value(other)
                .map_err(|e| AquaguardError::Json(source.to_string(), e))?;
            debug!(schema_version = %file.schema_version, "reading file wrapper");
            file.readings
        }
    };

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let index = i + 1;
            let object = record
                .as_object()
                .ok_or(AquaguardError::MalformedRecord(index))?;
            sample_from_json(object)
                .map_err(|source| AquaguardError::InvalidReading { index, source })
        })
        .collect()
}

pub fn load_json_readings(path: &Path) -> Result<Vec<SensorSample>, AquaguardError> {
    let source = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|e| AquaguardError::FileIO(source.clone(), e))?;
    parse_json_readings(&text, &source)
}

/// One CSV row before validation. Cells stay textual so empty and
/// unparseable cells can be told apart.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    sample_id: Option<String>,
    #[serde(default)]
    temperature: Option<String>,
    #[serde(default)]
    ph: Option<String>,
    #[serde(default)]
    dissolved_oxygen: Option<String>,
}

impl CsvRow {
    fn cell(&self, parameter: Parameter) -> Option<&str> {
        let cell = match parameter {
            Parameter::Temperature => &self.temperature,
            Parameter::Ph => &self.ph,
            Parameter::DissolvedOxygen => &self.dissolved_oxygen,
        };
        cell.as_deref().filter(|s| !s.is_empty())
    }

    fn number(&self, parameter: Parameter) -> Result<f64, ReadingError> {
        let raw = self
            .cell(parameter)
            .ok_or(ReadingError::Missing { field: parameter })?;
        raw.parse::<f64>().map_err(|_| ReadingError::NonNumeric {
            field: parameter,
            raw: raw.to_string(),
        })
    }

    fn into_sample(self) -> Result<SensorSample, ReadingError> {
        let reading = Reading::new(
            self.number(Parameter::Temperature)?,
            self.number(Parameter::Ph)?,
            self.number(Parameter::DissolvedOxygen)?,
        )?;
        let sample_id = self.sample_id.filter(|id| !id.is_empty());
        Ok(SensorSample::new(sample_id, reading))
    }
}

/// Parses CSV with a header row naming `temperature`, `ph`,
/// `dissolved_oxygen` and optionally `sample_id`, in any column order.
pub fn parse_csv_readings<R: Read>(
    reader: R,
    source: &str,
) -> Result<Vec<SensorSample>, AquaguardError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (i, result) in reader.deserialize::<CsvRow>().enumerate() {
        let index = i + 1;
        let row = result.map_err(|e| AquaguardError::CsvError(source.to_string(), e))?;
        let sample = row
            .into_sample()
            .map_err(|source| AquaguardError::InvalidReading { index, source })?;
        samples.push(sample);
    }
    Ok(samples)
}

pub fn load_csv_readings(path: &Path) -> Result<Vec<SensorSample>, AquaguardError> {
    let source = path.display().to_string();
    let file = fs::File::open(path).map_err(|e| AquaguardError::FileIO(source.clone(), e))?;
    parse_csv_readings(file, &source)
}

/// Loads samples from a `.json` or `.csv` file, chosen by extension.
pub fn load_readings(path: &Path) -> Result<Vec<SensorSample>, AquaguardError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let samples = match extension.as_deref() {
        Some("json") => load_json_readings(path)?,
        Some("csv") => load_csv_readings(path)?,
        _ => return Err(AquaguardError::UnsupportedFormat(path.display().to_string())),
    };
    info!(path = %path.display(), count = samples.len(), "loaded readings");
    Ok(samples)
}
