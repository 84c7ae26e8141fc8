//! Configuration management for mxtrend
//! The default file lives in ~/.mxtrend/config/mxtrend.toml

use anyhow::{anyhow, Context, Result};
use mxtrend_core::{CountryCode, DefaultSelection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main mxtrend configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MxtrendConfig {
    /// Snapshot location
    #[serde(default)]
    pub data: DataConfig,
    /// Defaults for a fresh panel
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    /// Directory holding General.csv, PIB.csv and Social.csv
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionConfig {
    /// Country plotted when none is requested
    #[serde(default = "default_home_country")]
    pub home_country: String,
    /// Position of the default indicator in the snapshot's indicator list
    #[serde(default = "default_indicator_index")]
    pub indicator_index: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            home_country: default_home_country(),
            indicator_index: default_indicator_index(),
        }
    }
}

fn default_home_country() -> String {
    "MEX".to_string()
}

fn default_indicator_index() -> usize {
    4
}

impl SelectionConfig {
    /// Codes are normalized the way command-line codes are.
    pub fn to_default_selection(&self) -> DefaultSelection {
        DefaultSelection {
            indicator_index: self.indicator_index,
            home_country: CountryCode::new(self.home_country.trim().to_ascii_uppercase()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    pub fn level(&self) -> Result<tracing::Level> {
        self.level
            .parse()
            .map_err(|_| anyhow!("invalid log level '{}' in configuration", self.level))
    }
}

/// Get the mxtrend home directory (defaults to ~/.mxtrend, `MXTREND_HOME` overrides)
pub fn mxtrend_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("MXTREND_HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir()
        .ok_or_else(|| anyhow!("Cannot determine home directory"))
        .map(|h| h.join(".mxtrend"))
}

/// Location: ~/.mxtrend/config/mxtrend.toml
pub fn config_path() -> Result<PathBuf> {
    Ok(mxtrend_home()?.join("config").join("mxtrend.toml"))
}

pub fn parse_config(contents: &str) -> Result<MxtrendConfig> {
    toml::from_str(contents).context("parsing mxtrend configuration")
}

/// Load the configuration. An explicit `path` must exist; the default
/// location falls back to built-in defaults when absent.
pub fn load_config(path: Option<&Path>) -> Result<MxtrendConfig> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = config_path()?;
            if !default_path.exists() {
                return Ok(MxtrendConfig::default());
            }
            default_path
        }
    };

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    parse_config(&contents).with_context(|| format!("in {}", config_path.display()))
}
