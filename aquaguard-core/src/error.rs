use aquaguard_schemas::reading::ReadingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AquaguardError {
    #[error("Invalid reading in record {index}: {source}")]
    InvalidReading {
        index: usize,
        #[source]
        source: ReadingError,
    },

    #[error("Record {0} is not a JSON object")]
    MalformedRecord(usize),

    #[error("Unsupported file format for '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("JSON error for '{0}': {1}")]
    Json(String, #[source] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
