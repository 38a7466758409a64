// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for modpack-probe
//!
//! Issues and reports serialize with stable wire names (`type`, `mod`,
//! `timestamp`, `total_issues`, ...) that differ from the Rust field names.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Sentinel recorded when no mod name could be pulled out of a line.
pub const UNKNOWN_MOD: &str = "unknown";

/// How much an issue threatens a successful startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// Known failure signatures plus the two synthetic kinds raised when the log
/// itself cannot be analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    ModLoadingError,
    DependencyMissing,
    VersionConflict,
    FileNotFound,
    MixinError,
    MemoryError,
    DuplicateMod,
    ConfigError,
    JavaError,
    ForgeError,

    // === Synthetic ===
    LogNotFound,
    LogReadError,
}

impl IssueKind {
    /// Signature kinds in the order the classifier evaluates them
    pub fn signatures() -> Vec<IssueKind> {
        vec![
            IssueKind::ModLoadingError,
            IssueKind::DependencyMissing,
            IssueKind::VersionConflict,
            IssueKind::FileNotFound,
            IssueKind::MixinError,
            IssueKind::MemoryError,
            IssueKind::DuplicateMod,
            IssueKind::ConfigError,
            IssueKind::JavaError,
            IssueKind::ForgeError,
        ]
    }

    /// Static severity lookup. Never inferred from line content.
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::ModLoadingError
            | IssueKind::MemoryError
            | IssueKind::JavaError
            | IssueKind::LogNotFound
            | IssueKind::LogReadError => Severity::Critical,
            IssueKind::DependencyMissing
            | IssueKind::VersionConflict
            | IssueKind::FileNotFound
            | IssueKind::MixinError
            | IssueKind::DuplicateMod
            | IssueKind::ConfigError
            | IssueKind::ForgeError => Severity::Warning,
        }
    }

    /// Wire name, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::ModLoadingError => "mod_loading_error",
            IssueKind::DependencyMissing => "dependency_missing",
            IssueKind::VersionConflict => "version_conflict",
            IssueKind::FileNotFound => "file_not_found",
            IssueKind::MixinError => "mixin_error",
            IssueKind::MemoryError => "memory_error",
            IssueKind::DuplicateMod => "duplicate_mod",
            IssueKind::ConfigError => "config_error",
            IssueKind::JavaError => "java_error",
            IssueKind::ForgeError => "forge_error",
            IssueKind::LogNotFound => "log_not_found",
            IssueKind::LogReadError => "log_read_error",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected occurrence of a signature match or synthetic error condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    #[serde(rename = "mod")]
    pub associated_mod: String,
    pub severity: Severity,
    #[serde(rename = "timestamp")]
    pub detected_at: String,
}

impl Issue {
    /// Build an issue stamped with the current local time. Severity always
    /// comes from the kind.
    pub fn new(kind: IssueKind, message: impl Into<String>, associated_mod: Option<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            associated_mod: associated_mod.unwrap_or_else(|| UNKNOWN_MOD.to_string()),
            severity: kind.severity(),
            detected_at: now_rfc3339(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }

    /// Mod name if one was extracted, `None` for the sentinel
    pub fn related_mod(&self) -> Option<&str> {
        if self.associated_mod == UNKNOWN_MOD {
            None
        } else {
            Some(&self.associated_mod)
        }
    }

    /// Content equality ignoring the detection timestamp
    pub fn same_finding(&self, other: &Issue) -> bool {
        self.kind == other.kind
            && self.message == other.message
            && self.associated_mod == other.associated_mod
            && self.severity == other.severity
    }
}

/// Output of one classification pass over a log artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Ordered by discovery in the source text
    pub issues: Vec<Issue>,
    pub startup_successful: bool,
}

/// Aggregate output artifact for one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupReport {
    pub test_timestamp: String,
    pub minecraft_directory: String,
    pub startup_successful: bool,
    pub total_issues: usize,
    pub critical_issues: usize,
    pub warning_issues: usize,
    pub issues: Vec<Issue>,
}

impl StartupReport {
    /// Counts are derived from the issue list here and nowhere else, so
    /// `critical + warning == total == issues.len()` always holds.
    pub fn from_classification(minecraft_directory: &Path, classification: Classification) -> Self {
        let Classification {
            issues,
            startup_successful,
        } = classification;
        let critical_issues = issues.iter().filter(|i| i.is_critical()).count();
        let warning_issues = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();

        Self {
            test_timestamp: now_rfc3339(),
            minecraft_directory: minecraft_directory.display().to_string(),
            startup_successful,
            total_issues: issues.len(),
            critical_issues,
            warning_issues,
            issues,
        }
    }

    pub fn critical(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Critical)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// Closing recommendation. A detected success phrase does not override
    /// critical issues found in the same log.
    pub fn verdict(&self) -> Verdict {
        if self.critical_issues > 0 {
            Verdict::Blocked(self.critical_issues)
        } else if self.startup_successful && self.total_issues == 0 {
            Verdict::Healthy
        } else if self.startup_successful {
            Verdict::Degraded(self.total_issues)
        } else {
            Verdict::Inconclusive(self.total_issues)
        }
    }
}

/// Overall recommendation printed after the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Healthy,
    /// Number of critical issues
    Blocked(usize),
    /// Startup reached the menu but this many warnings were logged
    Degraded(usize),
    /// No success phrase and no critical issues; carries the warning count
    Inconclusive(usize),
}

fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}
