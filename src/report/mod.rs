// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation module

pub mod formatter;
pub mod generator;

use crate::config::ProbeConfig;
use crate::types::*;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use generator::ReportGenerator;

/// Aggregate a classification into a report
pub fn generate_report(config: &ProbeConfig, classification: Classification) -> StartupReport {
    ReportGenerator::new(config).generate(classification)
}

/// Print report to console
pub fn print_report(report: &StartupReport, saved_to: Option<&Path>) {
    let formatter = ReportFormatter::new();
    formatter.print(report, saved_to);
}
