//! Integration tests for the hrtchart binary.
//!
//! These tests verify end-to-end behavior including:
//! - Spreadsheet and document generation
//! - Output naming from the start day
//! - Abort-before-write on bad input
//! - Mail failure after the document already exists

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test output directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hrtchart"));
    // Keep tests hermetic from any real user config or mailbox secret
    cmd.env_remove("SENDER_PASSWORD");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent");
    cmd
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hormone dosing calendar generator"));
}

#[test]
fn test_default_run_creates_both_artifacts() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path();

    cli()
        .arg("--out-dir")
        .arg(out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Spreadsheet written"))
        .stdout(predicate::str::contains("Document written"));

    let sheet = out_dir.join("hrtschedule2024-01-01.xlsx");
    let doc = out_dir.join("hrtschedule2024-01-01.docx");
    assert!(sheet.exists());
    assert!(doc.exists());
    assert!(fs::metadata(&sheet).unwrap().len() > 0);
    assert!(fs::metadata(&doc).unwrap().len() > 0);
}

#[test]
fn test_invalid_start_day_aborts_before_any_file() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path();

    cli()
        .arg("--out-dir")
        .arg(out_dir)
        .arg("--start-day")
        .arg("not-a-date")
        .assert()
        .failure();

    // No artifact may exist after a parse failure
    let entries: Vec<_> = fs::read_dir(out_dir).unwrap().collect();
    assert!(entries.is_empty(), "files were created despite bad date");
}

#[test]
fn test_skip_doc_produces_only_spreadsheet() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path();

    cli()
        .arg("--out-dir")
        .arg(out_dir)
        .arg("--skip-doc")
        .assert()
        .success();

    assert!(out_dir.join("hrtschedule2024-01-01.xlsx").exists());
    assert!(!out_dir.join("hrtschedule2024-01-01.docx").exists());
}

#[test]
fn test_skip_sheet_produces_only_document() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path();

    cli()
        .arg("--out-dir")
        .arg(out_dir)
        .arg("--skip-sheet")
        .assert()
        .success();

    assert!(!out_dir.join("hrtschedule2024-01-01.xlsx").exists());
    assert!(out_dir.join("hrtschedule2024-01-01.docx").exists());
}

#[test]
fn test_custom_name_and_start_day_in_output_names() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path();

    cli()
        .arg("--out-dir")
        .arg(out_dir)
        .arg("--start-day")
        .arg("2025-03-10")
        .arg("--file-name")
        .arg("HormonesSchedule")
        .assert()
        .success();

    assert!(out_dir.join("HormonesSchedule2025-03-10.xlsx").exists());
    assert!(out_dir.join("HormonesSchedule2025-03-10.docx").exists());
}

#[test]
fn test_send_with_skip_doc_is_rejected() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("--out-dir")
        .arg(temp_dir.path())
        .arg("--send")
        .arg("--skip-doc")
        .assert()
        .failure();
}

#[test]
fn test_mail_failure_leaves_document_on_disk() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path();

    // No SENDER_PASSWORD in the environment: the send must fail, but only
    // after the document was written, and the document must survive.
    cli()
        .arg("--out-dir")
        .arg(out_dir)
        .arg("--send")
        .arg("--recipient")
        .arg("someone@example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SENDER_PASSWORD"));

    assert!(out_dir.join("hrtschedule2024-01-01.docx").exists());
}

#[test]
fn test_config_file_supplies_output_name() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path().join("out");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[output]\nfile_name = \"cycle\"\nout_dir = \"{}\"\n",
            out_dir.display()
        ),
    )
    .unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    assert!(out_dir.join("cycle2024-01-01.xlsx").exists());
    assert!(out_dir.join("cycle2024-01-01.docx").exists());
}
