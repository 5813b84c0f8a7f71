//! Configuration management for the CLI
//!
//! Defaults, then a configuration file, then command-line flags - applied
//! field by field. Only the fields listed here are overridable; there is no
//! generic merge.

use crate::cli::{GetArgs, OutputFormat};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Sources to read when none are given on the command line
    pub sources: Vec<String>,

    /// Default trailing-columns window for the merged matrix
    pub last: Option<usize>,

    /// Default Kubernetes version filter
    pub k8s_version: Option<String>,

    /// Default output format
    pub output: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from a file (YAML or JSON by extension)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("yaml")
            || path.extension().and_then(|s| s.to_str()) == Some("yml")
        {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to load config file");
                    }
                }
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".kompat.yaml"),
            PathBuf::from(".kompat.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let kompat_dir = config_dir.join("kompat");
            paths.push(kompat_dir.join("config.yaml"));
            paths.push(kompat_dir.join("config.json"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".kompat.yaml"));
            paths.push(home_dir.join(".kompat.json"));
        }

        paths
    }

    /// Fill in `get` arguments the command line left unset.
    ///
    /// Flags always win; the config file only supplies defaults.
    pub fn apply_to(&self, args: &mut GetArgs) {
        if args.sources.is_empty() && !self.sources.is_empty() {
            args.sources = self.sources.clone();
        }
        if args.last.is_none() {
            args.last = self.last;
        }
        if args.k8s_version.is_none() {
            args.k8s_version = self.k8s_version.clone();
        }
    }
}
