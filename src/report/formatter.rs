// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console summary rendering
//!
//! The summary is rendered into a `String`; `print` writes it to stdout.

use crate::types::*;
use colored::*;
use std::fmt::Write as _;
use std::path::Path;

/// Longest message fragment shown per issue line
pub const MESSAGE_LIMIT: usize = 100;
/// Warnings listed before collapsing the rest into a "+N more" line
pub const WARNING_PREVIEW: usize = 5;

const RULE_WIDTH: usize = 60;
const SUBRULE_WIDTH: usize = 40;

pub struct ReportFormatter {
    color: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Renderer that never emits ANSI escapes
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn print(&self, report: &StartupReport, saved_to: Option<&Path>) {
        print!("{}", self.render(report, saved_to));
    }

    pub fn render(&self, report: &StartupReport, saved_to: Option<&Path>) -> String {
        let mut out = String::new();
        let rule = "=".repeat(RULE_WIDTH);

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(
            out,
            "{}",
            self.paint("MINECRAFT MODPACK STARTUP TEST REPORT", |s| s.bold().cyan())
        );
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Test completed: {}", report.test_timestamp);
        let status = if report.startup_successful {
            self.paint("✓ YES", |s| s.green())
        } else {
            self.paint("✗ NO", |s| s.red())
        };
        let _ = writeln!(out, "Startup successful: {}", status);
        let _ = writeln!(out, "Total issues found: {}", report.total_issues);
        let _ = writeln!(out, "Critical issues: {}", report.critical_issues);
        let _ = writeln!(out, "Warnings: {}", report.warning_issues);

        if !report.issues.is_empty() {
            self.render_issues(&mut out, report);
        }

        if let Some(path) = saved_to {
            let _ = writeln!(out);
            let _ = writeln!(out, "Full report saved to: {}", path.display());
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.render_verdict(report.verdict()));
        out
    }

    fn render_issues(&self, out: &mut String, report: &StartupReport) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.paint("ISSUES DETECTED:", |s| s.bold().yellow()));
        let _ = writeln!(out, "{}", "-".repeat(SUBRULE_WIDTH));

        let critical: Vec<&Issue> = report.critical().collect();
        let warnings: Vec<&Issue> = report.warnings().collect();

        if !critical.is_empty() {
            let _ = writeln!(
                out,
                "{}",
                self.paint("CRITICAL ISSUES (prevent startup):", |s| s.bold().red())
            );
            for issue in &critical {
                let _ = writeln!(out, "{}", self.issue_line(issue));
                if let Some(name) = issue.related_mod() {
                    let _ = writeln!(out, "    Related mod: {}", name);
                }
            }
        }

        if !warnings.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{}",
                self.paint("WARNINGS (may cause issues):", |s| s.bold().yellow())
            );
            for issue in warnings.iter().take(WARNING_PREVIEW) {
                let _ = writeln!(out, "{}", self.issue_line(issue));
            }
            if warnings.len() > WARNING_PREVIEW {
                let _ = writeln!(
                    out,
                    "  ... and {} more warnings",
                    warnings.len() - WARNING_PREVIEW
                );
            }
        }
    }

    fn issue_line(&self, issue: &Issue) -> String {
        let label = issue.kind.as_str().to_uppercase();
        let label = match issue.severity {
            Severity::Critical => self.paint(&label, |s| s.red()),
            Severity::Warning => self.paint(&label, |s| s.yellow()),
        };
        format!("  • {}: {}", label, truncate(&issue.message, MESSAGE_LIMIT))
    }

    fn render_verdict(&self, verdict: Verdict) -> String {
        match verdict {
            Verdict::Healthy => self.paint(
                "SUCCESS: Your modpack appears to start up correctly!",
                |s| s.green().bold(),
            ),
            Verdict::Blocked(n) => format!(
                "{}\nRecommend fixing critical issues before playing",
                self.paint(&format!("CRITICAL: {} issues prevent startup", n), |s| {
                    s.red().bold()
                })
            ),
            Verdict::Degraded(n) => self.paint(
                &format!("WARNING: Startup worked but {} issues detected", n),
                |s| s.yellow().bold(),
            ),
            Verdict::Inconclusive(n) => self.paint(
                &format!("WARNING: Main menu not reached in log, {} issues detected", n),
                |s| s.yellow().bold(),
            ),
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Cut to `limit` characters, marking the cut with `...`
pub fn truncate(message: &str, limit: usize) -> String {
    match message.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &message[..idx]),
        None => message.to_string(),
    }
}
