//! Configuration settings
//!
//! Settings are loaded from `attrview.toml`:
//!
//! ```toml
//! [source]
//! location = "https://raw.githubusercontent.com/openshift/openshift-docs/main/_attributes/common-attributes.adoc"
//! timeout_secs = 30
//!
//! [display]
//! format = "json"
//! ```
//!
//! Every table and key is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Attributes file shipped with the OpenShift documentation
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/openshift/openshift-docs/main/_attributes/common-attributes.adoc";

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "attrview.toml";

/// Output format for non-interactive commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
    /// Standalone HTML page
    Html,
}

/// Errors while loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Where the attributes document comes from
    pub source: SourceSettings,
    /// Output preferences
    pub display: DisplaySettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from an explicit path, or from `attrview.toml` in `dir`
    /// when present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if !candidate.exists() {
                    debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let settings =
            Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}

/// Document source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceSettings {
    /// URL (`http://`, `https://`) or local file path
    pub location: String,
    /// Request timeout; no timeout when unset
    pub timeout_secs: Option<u64>,
}

impl SourceSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            location: DEFAULT_SOURCE.to_string(),
            timeout_secs: None,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Default format for `list`
    pub format: OutputFormat,
}
