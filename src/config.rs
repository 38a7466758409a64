// SPDX-License-Identifier: PMPL-1.0-or-later

//! Probe configuration
//!
//! Settings come from CLI flags, an optional YAML file, and defaults, in that
//! order of precedence:
//! - `minecraft_dir`: `.`
//! - `java_path`: `java`
//! - `timeout_secs`: 300
//! - `log_file`: `logs/latest.log` (relative to `minecraft_dir` unless absolute)
//! - `report_dir`: unset, reports land in `minecraft_dir`
//!
//! Only the resolved log path feeds the classifier. `java_path` and
//! `timeout_secs` describe the launch collaborator and are carried through
//! untouched.

use crate::error::ProbeError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_JAVA_PATH: &str = "java";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_LOG_FILE: &str = "logs/latest.log";

/// Shape of the optional YAML config file
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub minecraft_dir: Option<PathBuf>,
    pub java_path: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub report_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ProbeError> {
        let content = fs::read_to_string(path).map_err(|e| ProbeError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ProbeError> {
        // An empty document deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ProbeError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Values given on the command line; `None` defers to the file or default
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub minecraft_dir: Option<PathBuf>,
    pub java_path: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub report_dir: Option<PathBuf>,
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub minecraft_dir: PathBuf,
    pub java_path: String,
    pub timeout_secs: u64,
    pub log_file: PathBuf,
    pub report_dir: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::merge(Overrides::default(), FileConfig::default())
    }
}

impl ProbeConfig {
    /// Config rooted at an instance directory, everything else defaulted
    pub fn for_instance(minecraft_dir: impl Into<PathBuf>) -> Self {
        Self {
            minecraft_dir: minecraft_dir.into(),
            ..Self::default()
        }
    }

    /// Apply precedence: CLI > config file > defaults.
    pub fn resolve(cli: Overrides, config_file: Option<&Path>) -> Result<Self, ProbeError> {
        let file = match config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    fn merge(cli: Overrides, file: FileConfig) -> Self {
        Self {
            minecraft_dir: cli
                .minecraft_dir
                .or(file.minecraft_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            java_path: cli
                .java_path
                .or(file.java_path)
                .unwrap_or_else(|| DEFAULT_JAVA_PATH.to_string()),
            timeout_secs: cli
                .timeout_secs
                .or(file.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            log_file: cli
                .log_file
                .or(file.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            report_dir: cli.report_dir.or(file.report_dir),
        }
    }

    /// Log artifact the classifier reads
    pub fn log_path(&self) -> PathBuf {
        if self.log_file.is_absolute() {
            self.log_file.clone()
        } else {
            self.minecraft_dir.join(&self.log_file)
        }
    }

    /// Directory timestamped reports are written into
    pub fn report_dir(&self) -> &Path {
        self.report_dir.as_deref().unwrap_or(&self.minecraft_dir)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
