//! Data model for species-specific water-quality evaluation: the measured
//! parameters, validated sensor readings, bound pairs and the per-species
//! threshold tables.

pub mod file_formats;
pub mod parameter;
pub mod reading;
pub mod species;
pub mod threshold;
