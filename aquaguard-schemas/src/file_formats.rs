use crate::reading::SensorSample;
use serde::{Deserialize, Serialize};

/// Current schema version written into generated files.
pub const SCHEMA_VERSION: &str = "1.0";

/// Wrapper for a JSON readings file. Records stay untyped here so the input
/// boundary can report exactly which field of which record is bad.
#[derive(Debug, Deserialize)]
pub struct ReadingFile {
    pub schema_version: String,
    pub readings: Vec<serde_json::Value>,
}

/// Wrapper used when writing generated or validated samples back out.
#[derive(Debug, Serialize)]
pub struct SampleFile<'a> {
    pub schema_version: &'a str,
    pub species: &'a str,
    pub readings: &'a [SensorSample],
}
