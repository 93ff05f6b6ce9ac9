use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gcounsel_report::consts::DEFAULT_REPORT_FILE_NAME;
use gcounsel_select::consts::{DEFAULT_CONSEQUENCE, DEFAULT_LIMIT};
use gcounsel_select::{ConsequenceFilter, SelectError};

fn default_consequences() -> Vec<String> {
    vec![DEFAULT_CONSEQUENCE.to_string()]
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

///
/// A session described in TOML.
///
/// ```toml
/// genes = ["BRCA1", "TP53"]
/// documents = ["~/referrals/letter.pdf"]
/// consequences = ["stop_gained", "frameshift_variant"]
/// limit = 3
/// output = "$HOME/reports/brca.pdf"
/// ```
///
/// Every key is optional. `documents` and `output` go through shell expansion
/// (`~` and `$VAR`) when the file is loaded.
///
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct SessionConfig {
    #[serde(default)]
    pub genes: Vec<String>,
    #[serde(default)]
    pub documents: Vec<PathBuf>,
    #[serde(default = "default_consequences")]
    pub consequences: Vec<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub output: Option<PathBuf>,
    pub species: Option<String>,
    pub model: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            genes: Vec::new(),
            documents: Vec::new(),
            consequences: default_consequences(),
            limit: default_limit(),
            output: None,
            species: None,
            model: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not expand path `{path}`: {message}")]
    Expand { path: String, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

fn expand_path(path: &Path) -> ConfigResult<PathBuf> {
    let Some(raw) = path.to_str() else {
        return Ok(path.to_path_buf());
    };
    let expanded = shellexpand::full(raw).map_err(|err| ConfigError::Expand {
        path: raw.to_string(),
        message: err.to_string(),
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}

impl SessionConfig {
    /// The consequence filter this session asks for.
    pub fn filter(&self) -> Result<ConsequenceFilter, SelectError> {
        ConsequenceFilter::new(&self.consequences, self.limit)
    }

    /// Where the report should be written; defaults to the standard report file name.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE_NAME))
    }

    fn expand_paths(mut self) -> ConfigResult<Self> {
        self.documents = self
            .documents
            .iter()
            .map(|doc| expand_path(doc))
            .collect::<ConfigResult<Vec<_>>>()?;
        self.output = self.output.as_deref().map(expand_path).transpose()?;
        Ok(self)
    }
}

impl TryFrom<&Path> for SessionConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: SessionConfig = toml::from_str(&toml_str)?;
        config.expand_paths()
    }
}
