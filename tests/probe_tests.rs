// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests: log on disk -> classification -> persisted report

use modpack_probe::classify;
use modpack_probe::config::ProbeConfig;
use modpack_probe::probe;
use modpack_probe::report::ReportFormatter;
use modpack_probe::signatures::SignatureTable;
use modpack_probe::storage;
use modpack_probe::types::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn table() -> SignatureTable {
    SignatureTable::builtin().expect("built-in signatures compile")
}

fn create_instance(dir: &TempDir, log: &[u8]) -> PathBuf {
    let logs = dir.path().join("logs");
    fs::create_dir_all(&logs).unwrap();
    fs::write(logs.join("latest.log"), log).unwrap();
    dir.path().to_path_buf()
}

fn assert_counts_consistent(report: &StartupReport) {
    assert_eq!(
        report.critical_issues + report.warning_issues,
        report.total_issues
    );
    assert_eq!(report.total_issues, report.issues.len());
}

#[test]
fn test_critical_signature_without_success() {
    let dir = TempDir::new().unwrap();
    let instance = create_instance(
        &dir,
        b"[12:00:01] [main/INFO]: Loading 212 mods\n\
          [12:00:09] [main/ERROR]: Failed to load mod: betterfoliage\n",
    );
    let outcome = probe::run(&ProbeConfig::for_instance(&instance), &table(), None).unwrap();

    assert!(!outcome.report.startup_successful);
    assert!(outcome.report.critical_issues >= 1);
    assert_eq!(outcome.report.issues[0].kind, IssueKind::ModLoadingError);
    assert_eq!(outcome.report.issues[0].associated_mod, "betterfoliage");
    assert_counts_consistent(&outcome.report);
}

#[test]
fn test_clean_startup() {
    let dir = TempDir::new().unwrap();
    let instance = create_instance(
        &dir,
        b"[12:00:01] [main/INFO]: Loading 212 mods\n\
          [12:01:30] [Render thread/INFO]: Reached main menu\n",
    );
    let outcome = probe::run(&ProbeConfig::for_instance(&instance), &table(), None).unwrap();

    assert!(outcome.report.startup_successful);
    assert_eq!(outcome.report.total_issues, 0);
    assert_counts_consistent(&outcome.report);
}

#[test]
fn test_missing_log_yields_single_critical_issue() {
    let dir = TempDir::new().unwrap();
    let outcome = probe::run(&ProbeConfig::for_instance(dir.path()), &table(), None).unwrap();

    assert_eq!(outcome.report.total_issues, 1);
    assert_eq!(outcome.report.critical_issues, 1);
    assert_eq!(outcome.report.issues[0].kind, IssueKind::LogNotFound);
    assert_eq!(outcome.report.issues[0].severity, Severity::Critical);
    assert!(!outcome.report.startup_successful);
    // report is still written
    assert!(outcome.saved_to.exists());
}

#[test]
fn test_unreadable_log_yields_read_error() {
    let dir = TempDir::new().unwrap();
    // a directory where the log file should be cannot be read as a file
    fs::create_dir_all(dir.path().join("logs/latest.log")).unwrap();
    let classification =
        classify::classify_file(&table(), &dir.path().join("logs/latest.log"));

    assert_eq!(classification.issues.len(), 1);
    assert_eq!(classification.issues[0].kind, IssueKind::LogReadError);
    assert!(classification.issues[0].is_critical());
    assert!(!classification.startup_successful);
}

#[test]
fn test_malformed_utf8_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let mut log = b"\xEF\xBB\xBFstart\n".to_vec();
    log.extend_from_slice(b"garbage \xFF\xFE bytes then Java heap space\n");
    log.extend_from_slice(b"Client successfully started\n");
    let instance = create_instance(&dir, &log);

    let classification = classify::classify_file(&table(), &instance.join("logs/latest.log"));
    assert!(classification.startup_successful);
    assert_eq!(classification.issues.len(), 1);
    assert_eq!(classification.issues[0].kind, IssueKind::MemoryError);
    assert!(classification.issues[0].message.contains('\u{FFFD}'));
}

#[test]
fn test_success_and_critical_can_coexist() {
    let table = table();
    let text = "Reached main menu\nException in thread: java.lang.OutOfMemoryError\n";
    let classification = classify::classify_text(&table, text);
    let report = StartupReport::from_classification(
        std::path::Path::new("."),
        classification,
    );

    assert!(report.startup_successful);
    assert_eq!(report.critical_issues, 1);
    assert_eq!(report.verdict(), Verdict::Blocked(1));
}

#[test]
fn test_classification_is_idempotent() {
    let table = table();
    let text = "\
[FML]: Found duplicate mod jei
Mixin apply failed: mod: sodium
Version conflict between create and flywheel
";
    let first = classify::classify_text(&table, text);
    let second = classify::classify_text(&table, text);

    assert_eq!(first.issues.len(), second.issues.len());
    assert!(first
        .issues
        .iter()
        .zip(&second.issues)
        .all(|(a, b)| a.same_finding(b)));
    assert_eq!(first.startup_successful, second.startup_successful);
}

#[test]
fn test_line_matching_two_signatures_yields_two_issues() {
    let classification = classify::classify_text(
        &table(),
        "[main/FATAL] ModLauncher error: UnsupportedClassVersionError\n",
    );
    let kinds: Vec<_> = classification.issues.iter().map(|i| i.kind).collect();

    assert_eq!(kinds, vec![IssueKind::JavaError, IssueKind::ForgeError]);
    assert!(classification
        .issues
        .iter()
        .all(|i| i.message == "[main/FATAL] ModLauncher error: UnsupportedClassVersionError"));
}

#[test]
fn test_console_truncates_warnings() {
    let dir = TempDir::new().unwrap();
    let log: String = (0..9)
        .map(|i| format!("[main/WARN]: Invalid config entry {}\n", i))
        .collect();
    let instance = create_instance(&dir, log.as_bytes());
    let outcome = probe::run(&ProbeConfig::for_instance(&instance), &table(), None).unwrap();
    assert_eq!(outcome.report.warning_issues, 9);

    let rendered = ReportFormatter::plain().render(&outcome.report, Some(outcome.saved_to.as_path()));
    let shown = rendered.lines().filter(|l| l.starts_with("  • ")).count();
    assert_eq!(shown, 5);
    assert!(rendered.contains("  ... and 4 more warnings"));
}

#[test]
fn test_report_snapshot_schema() {
    let dir = TempDir::new().unwrap();
    let instance = create_instance(&dir, b"Could not find file config/jei.toml\n");
    let outcome = probe::run(&ProbeConfig::for_instance(&instance), &table(), None).unwrap();

    let file_name = outcome.saved_to.file_name().unwrap().to_string_lossy();
    assert!(file_name.starts_with("startup_test_report_"));
    assert_eq!(outcome.saved_to.parent(), Some(instance.as_path()));

    let raw = fs::read_to_string(&outcome.saved_to).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    for key in [
        "test_timestamp",
        "minecraft_directory",
        "startup_successful",
        "total_issues",
        "critical_issues",
        "warning_issues",
        "issues",
    ] {
        assert!(value.get(key).is_some(), "missing field {}", key);
    }
    assert_eq!(value["issues"][0]["type"], "file_not_found");
    assert_eq!(value["issues"][0]["severity"], "warning");
    assert_eq!(value["issues"][0]["mod"], "unknown");

    assert_eq!(storage::load_report(&outcome.saved_to).unwrap(), outcome.report);
}

#[test]
fn test_explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let instance = create_instance(&dir, b"Reached main menu\n");
    let target = dir.path().join("out.json");
    let outcome = probe::run(
        &ProbeConfig::for_instance(&instance),
        &table(),
        Some(target.as_path()),
    )
    .unwrap();

    assert_eq!(outcome.saved_to, target);
    assert!(target.exists());
}

#[test]
fn test_unwritable_report_dir_is_fatal() {
    let dir = TempDir::new().unwrap();
    let instance = create_instance(&dir, b"Reached main menu\n");
    let mut config = ProbeConfig::for_instance(&instance);
    config.report_dir = Some(dir.path().join("missing/reports"));

    let err = probe::run(&config, &table(), None).unwrap_err();
    assert!(matches!(
        err,
        modpack_probe::error::ProbeError::PersistenceFailure { .. }
    ));
}
