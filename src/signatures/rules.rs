// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in failure signatures and success phrases
//!
//! Patterns are plain regex sources; case-insensitivity is applied when the
//! table is compiled.

use crate::types::IssueKind;

/// Source pattern for each signature kind
pub fn pattern_for(kind: IssueKind) -> Option<&'static str> {
    let pattern = match kind {
        IssueKind::ModLoadingError => "Error loading mod|Failed to load mod|ModLoadingException",
        IssueKind::DependencyMissing => "Missing required dependency|Unsatisfied dependency",
        IssueKind::VersionConflict => "Version conflict|Incompatible mod version|requires version",
        IssueKind::FileNotFound => "FileNotFoundException|Could not find file|Missing file",
        IssueKind::MixinError => "Mixin apply failed|MixinException|Mixin conflict",
        IssueKind::MemoryError => "OutOfMemoryError|Java heap space|GC overhead limit",
        IssueKind::DuplicateMod => "Duplicate mod|Found duplicate|Multiple mods with same",
        IssueKind::ConfigError => "Configuration error|Invalid config|Config parse error",
        IssueKind::JavaError => "UnsupportedClassVersionError|Java version|JVM crash",
        IssueKind::ForgeError => "FML|Forge.*error|ModLauncher.*error",
        IssueKind::LogNotFound | IssueKind::LogReadError => return None,
    };
    Some(pattern)
}

/// "Reached the main menu" style phrases
pub const SUCCESS_PATTERNS: &[&str] = &[
    "Minecraft main menu.*displayed",
    "Successfully loaded.*main menu",
    "Client successfully started",
    "Reached main menu",
];

/// Loose `mod: name` / `mod name` association
pub const MOD_NAME_PATTERN: &str = r"mod[:\s]+([a-zA-Z0-9_]+)";
