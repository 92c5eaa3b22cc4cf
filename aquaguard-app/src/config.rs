use anyhow::{Context, Result};
use aquaguard_schemas::species::Species;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

fn default_output_dir() -> PathBuf {
    PathBuf::from("./data/runs")
}

fn default_true() -> bool {
    true
}

/// Settings for one batch evaluation, loaded from YAML.
///
/// ```yaml
/// species: salmon
/// input: ./data/readings/pen_3.csv
/// output_dir: ./data/runs
/// write_json: false
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
    pub species: String,
    pub input: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_true")]
    pub write_csv: bool,
    #[serde(default = "default_true")]
    pub write_json: bool,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "loading run configuration");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse YAML from {:?}", path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: RunConfig = serde_yaml::from_str(content)?;
        config.species()?;
        Ok(config)
    }

    /// Resolves the configured species name against the registry.
    pub fn species(&self) -> Result<Species> {
        Ok(self.species.parse::<Species>()?)
    }
}
