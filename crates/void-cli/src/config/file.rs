use crate::cli::{FitnessKindArg, SamplerKindArg, StrategyKindArg};
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileDockingConfig {
    pub strategy: Option<StrategyKindArg>,
    pub attempts: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileSamplerConfig {
    pub kind: Option<SamplerKindArg>,
    pub extent: Option<f64>,
    pub density: Option<usize>,
    pub centers: Option<Vec<usize>>,
    pub num_points: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConstraintConfig {
    pub indices: Option<Vec<usize>>,
    pub sphere: Option<f64>,
    pub max_sites: Option<usize>,
}

/// Fitness section; `members` is only read for `kind = "multiple"`.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileFitnessConfig {
    pub kind: Option<FitnessKindArg>,
    pub threshold: Option<f64>,
    pub step: Option<bool>,
    pub cutoff: Option<f64>,
    pub target: Option<f64>,
    pub sigma: Option<f64>,
    pub center: Option<[f64; 3]>,
    pub radius: Option<f64>,
    pub members: Option<Vec<FileFitnessConfig>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileOutputConfig {
    pub num_outputs: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub docking: Option<FileDockingConfig>,
    pub sampler: Option<FileSamplerConfig>,
    pub constraint: Option<FileConstraintConfig>,
    pub fitness: Option<FileFitnessConfig>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
