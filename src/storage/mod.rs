// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage for startup reports
//!
//! One pretty-printed JSON snapshot per run. Nothing is retried: a failed
//! write is a fatal [`ProbeError::PersistenceFailure`].

use crate::error::ProbeError;
use crate::types::StartupReport;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub const REPORT_PREFIX: &str = "startup_test_report_";

/// `startup_test_report_<YYYYmmdd_HHMMSS>.json`, second resolution
pub fn report_file_name() -> String {
    format!("{}{}.json", REPORT_PREFIX, Local::now().format("%Y%m%d_%H%M%S"))
}

/// Write the report into `directory` under a timestamped name
pub fn persist_report(report: &StartupReport, directory: &Path) -> Result<PathBuf, ProbeError> {
    let path = directory.join(report_file_name());
    write_report(report, &path)?;
    Ok(path)
}

/// Write the report to an explicit path
pub fn write_report(report: &StartupReport, path: &Path) -> Result<(), ProbeError> {
    let failure = |reason: String| ProbeError::PersistenceFailure {
        path: path.to_path_buf(),
        reason,
    };
    let json = serde_json::to_string_pretty(report).map_err(|e| failure(e.to_string()))?;
    fs::write(path, json).map_err(|e| failure(e.to_string()))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

/// Load a previously written snapshot
pub fn load_report(path: &Path) -> anyhow::Result<StartupReport> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
