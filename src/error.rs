// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for a probe run
//!
//! `MissingArtifact` and `UnreadableArtifact` never escape the classifier:
//! they are folded into a single critical [`Issue`]. `PersistenceFailure`
//! and `Config` terminate the run.

use crate::types::{Issue, IssueKind};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Log file not found: {}", .0.display())]
    MissingArtifact(PathBuf),

    #[error("Error reading log file {}: {source}", .path.display())]
    UnreadableArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to {}: {reason}", .path.display())]
    PersistenceFailure { path: PathBuf, reason: String },

    #[error("Invalid configuration in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl ProbeError {
    /// Synthetic issue kind for the recoverable variants
    pub fn issue_kind(&self) -> Option<IssueKind> {
        match self {
            ProbeError::MissingArtifact(_) => Some(IssueKind::LogNotFound),
            ProbeError::UnreadableArtifact { .. } => Some(IssueKind::LogReadError),
            ProbeError::PersistenceFailure { .. } | ProbeError::Config { .. } => None,
        }
    }

    /// Fold a recoverable error into the issue list. Fatal variants are
    /// handed back unchanged.
    pub fn into_issue(self) -> Result<Issue, ProbeError> {
        match self.issue_kind() {
            Some(kind) => Ok(Issue::new(kind, self.to_string(), None)),
            None => Err(self),
        }
    }
}
