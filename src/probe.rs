// SPDX-License-Identifier: PMPL-1.0-or-later

//! One probe run: classify -> generate -> persist
//!
//! Strictly sequential. Nothing touches disk until classification has
//! finished, so an interrupted run leaves no partial report behind.

use crate::classify;
use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::report;
use crate::signatures::SignatureTable;
use crate::storage;
use crate::types::StartupReport;
use std::path::{Path, PathBuf};

/// Report plus where its snapshot was written
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub report: StartupReport,
    pub saved_to: PathBuf,
}

/// Analyze the configured log and persist the report. `output` overrides
/// the timestamped file name.
pub fn run(
    config: &ProbeConfig,
    table: &SignatureTable,
    output: Option<&Path>,
) -> Result<ProbeOutcome, ProbeError> {
    let log_path = config.log_path();
    tracing::debug!(
        log = %log_path.display(),
        java = %config.java_path,
        timeout_secs = config.timeout_secs,
        "starting probe run"
    );

    let classification = classify::classify_file(table, &log_path);
    let report = report::generate_report(config, classification);

    let saved_to = match output {
        Some(path) => {
            storage::write_report(&report, path)?;
            path.to_path_buf()
        }
        None => storage::persist_report(&report, config.report_dir())?,
    };

    Ok(ProbeOutcome { report, saved_to })
}
