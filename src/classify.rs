// SPDX-License-Identifier: PMPL-1.0-or-later

//! Log classification
//!
//! Turns the text of a client log into an ordered list of issues plus a
//! "reached the main menu" flag. Pure with respect to the signature table:
//! nothing is accumulated outside the returned [`Classification`].

use crate::error::ProbeError;
use crate::signatures::SignatureTable;
use crate::types::{Classification, Issue, IssueKind};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// Classify already-decoded log text
pub fn classify_text(table: &SignatureTable, text: &str) -> Classification {
    let mut issues = Vec::new();

    for line in text.lines() {
        for kind in table.matching_kinds(line) {
            issues.push(Issue::new(kind, line.trim(), table.mod_name(line)));
        }
    }

    let startup_successful = table.success_observed(text);
    debug!(
        lines = text.lines().count(),
        issues = issues.len(),
        startup_successful,
        "classified log text"
    );

    Classification {
        issues,
        startup_successful,
    }
}

/// Read and classify a log file. A missing or unreadable file yields a
/// single critical issue and no content analysis.
pub fn classify_file(table: &SignatureTable, path: &Path) -> Classification {
    match read_log(path) {
        Ok(text) => {
            info!(path = %path.display(), "analyzing log file");
            classify_text(table, &text)
        }
        Err(err) => {
            warn!("{}", err);
            let issue = err.into_issue().unwrap_or_else(|other| {
                Issue::new(IssueKind::LogReadError, other.to_string(), None)
            });
            Classification {
                issues: vec![issue],
                startup_successful: false,
            }
        }
    }
}

/// Lenient read: malformed UTF-8 is replaced, never rejected.
pub fn read_log(path: &Path) -> Result<String, ProbeError> {
    let raw_bytes = fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ProbeError::MissingArtifact(path.to_path_buf())
        } else {
            ProbeError::UnreadableArtifact {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&raw_bytes);
    if had_errors {
        debug!(path = %path.display(), "replaced malformed UTF-8 sequences");
    }
    Ok(text.into_owned())
}
