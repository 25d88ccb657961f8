//! Configuration shared by the dump tools

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::PeekError;
use crate::reader::{DEFAULT_NA_VALUES, ReadOptions};

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "sheetpeek.toml";

pub const DEFAULT_WORKBOOK: &str = "Phần Mềm v2 GVTG.xlsx";
pub const DEFAULT_SHEET: &str = "Dashboard GV";
pub const DEFAULT_MAX_COLWIDTH: usize = 100;

/// Main configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PeekConfig {
    /// Workbook read when no file is given on the command line
    pub workbook: PathBuf,
    /// Sheet printed by the row printer
    pub sheet: String,
    /// Widest cell text the table dump shows before cutting it short
    pub max_colwidth: usize,
    /// Text contents read as missing cells
    pub na_values: Vec<String>,
}

impl PeekConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PeekConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the explicit config file if given, else `sheetpeek.toml` from the
    /// working directory if it exists, else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = if let Some(path) = explicit {
            Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        } else {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Self::from_file(&default_path).with_context(|| {
                    format!("Failed to load config from {}", default_path.display())
                })?
            } else {
                debug!("no config file, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the renderers cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.max_colwidth < 4 {
            return Err(PeekError::InvalidConfig(format!(
                "max_colwidth must be at least 4, got {}",
                self.max_colwidth
            ))
            .into());
        }
        if self.sheet.trim().is_empty() {
            return Err(PeekError::InvalidConfig("sheet name must not be empty".to_string()).into());
        }
        Ok(())
    }

    pub fn read_options(&self) -> ReadOptions {
        ReadOptions::with_na_values(self.na_values.iter().cloned())
    }
}

impl Default for PeekConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            sheet: DEFAULT_SHEET.to_string(),
            max_colwidth: DEFAULT_MAX_COLWIDTH,
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
