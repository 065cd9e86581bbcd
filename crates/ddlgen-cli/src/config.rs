//! Configuration file handling

use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::args::OutputFormat;

const CONFIG_FILE_NAME: &str = "ddlgen.toml";

/// Configuration for ddlgen
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Target dialect name (e.g. "mssql")
    #[serde(default)]
    pub dialect: Option<String>,

    /// Output format (text, json)
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Run the syntax check on generated SQL
    #[serde(default)]
    pub check: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).into_diagnostic()?;
        let config: Config = toml::from_str(&contents).into_diagnostic()?;
        Ok(config)
    }

    /// Try to find and load ddlgen.toml in current directory or parent directories
    pub fn find_and_load() -> Result<Option<Self>> {
        let mut current_dir = std::env::current_dir().into_diagnostic()?;

        loop {
            let config_path = current_dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading configuration");
                return Ok(Some(Self::from_file(&config_path)?));
            }

            // Try parent directory
            if !current_dir.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Load from an explicit path, or search for ddlgen.toml
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::find_and_load()?.unwrap_or_default()),
        }
    }

    /// Merge CLI arguments into configuration
    /// CLI arguments take precedence over config file values
    pub fn merge_with_args(
        mut self,
        dialect: &Option<String>,
        format: &Option<OutputFormat>,
        check: bool,
    ) -> Self {
        if dialect.is_some() {
            self.dialect = dialect.clone();
        }

        if format.is_some() {
            self.format = *format;
        }

        self.check |= check;

        self
    }
}
