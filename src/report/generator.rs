// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation logic

use crate::config::ProbeConfig;
use crate::types::*;

pub struct ReportGenerator<'a> {
    config: &'a ProbeConfig,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(config: &'a ProbeConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, classification: Classification) -> StartupReport {
        let report =
            StartupReport::from_classification(&self.config.minecraft_dir, classification);
        tracing::debug!(
            total = report.total_issues,
            critical = report.critical_issues,
            warnings = report.warning_issues,
            "report generated"
        );
        report
    }
}
