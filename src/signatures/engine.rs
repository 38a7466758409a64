// SPDX-License-Identifier: PMPL-1.0-or-later

//! Compiled signature table
//!
//! Every signature is compiled into one `RegexSet`, so a single pass over a
//! line reports all matching kinds at once.

use crate::signatures::rules::{self, MOD_NAME_PATTERN, SUCCESS_PATTERNS};
use crate::types::{IssueKind, Severity};
use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

/// A named detection pattern
#[derive(Debug, Clone)]
pub struct Signature {
    pub kind: IssueKind,
    pub pattern: Regex,
}

impl Signature {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

/// Immutable detection configuration handed to the classifier
#[derive(Debug, Clone)]
pub struct SignatureTable {
    signatures: Vec<Signature>,
    set: RegexSet,
    success_patterns: Vec<Regex>,
    mod_name: Regex,
}

impl SignatureTable {
    /// The fixed built-in table
    pub fn builtin() -> Result<Self, regex::Error> {
        let entries: Vec<(IssueKind, &str)> = IssueKind::signatures()
            .into_iter()
            .filter_map(|kind| rules::pattern_for(kind).map(|p| (kind, p)))
            .collect();
        Self::from_patterns(&entries, SUCCESS_PATTERNS)
    }

    /// Build a table from raw pattern sources. All patterns match
    /// case-insensitively; table order is preserved.
    pub fn from_patterns(
        signatures: &[(IssueKind, &str)],
        success_patterns: &[&str],
    ) -> Result<Self, regex::Error> {
        let compiled = signatures
            .iter()
            .map(|(kind, source)| {
                Ok(Signature {
                    kind: *kind,
                    pattern: insensitive(source)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        let set = RegexSetBuilder::new(signatures.iter().map(|(_, source)| *source))
            .case_insensitive(true)
            .build()?;

        let success_patterns = success_patterns
            .iter()
            .map(|source| insensitive(source))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            signatures: compiled,
            set,
            success_patterns,
            mod_name: insensitive(MOD_NAME_PATTERN)?,
        })
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn success_patterns(&self) -> &[Regex] {
        &self.success_patterns
    }

    /// Every signature kind matching `line`, in table order
    pub fn matching_kinds(&self, line: &str) -> Vec<IssueKind> {
        self.set
            .matches(line)
            .into_iter()
            .map(|idx| self.signatures[idx].kind)
            .collect()
    }

    /// Best-effort mod association. May point at the wrong mod.
    pub fn mod_name(&self, line: &str) -> Option<String> {
        self.mod_name
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Scan the whole text (not line by line); stops at the first success
    /// pattern that matches.
    pub fn success_observed(&self, text: &str) -> bool {
        self.success_patterns.iter().any(|p| p.is_match(text))
    }
}

fn insensitive(source: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(source).case_insensitive(true).build()
}
