use crate::error::{CliError, Result};
use levelized::workflows::evaluate::FailurePolicy;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileIndustryConfig {
    pub interest_rate: Option<f64>,
    pub loan_period: Option<f64>,
    pub co2_tax_rate: Option<f64>,
    pub land_tax_rate: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FileOnInvalid {
    Halt,
    Skip,
}

impl From<FileOnInvalid> for FailurePolicy {
    fn from(value: FileOnInvalid) -> Self {
        match value {
            FileOnInvalid::Halt => FailurePolicy::Halt,
            FileOnInvalid::Skip => FailurePolicy::Skip,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileEvaluationConfig {
    pub on_invalid: Option<FileOnInvalid>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub industry: Option<FileIndustryConfig>,
    pub evaluation: Option<FileEvaluationConfig>,
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
