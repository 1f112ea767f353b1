//! Tests for CLI argument parsing and the end-to-end binary

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use tempfile::TempDir;

use parteq::cli::Cli;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["parteq", "-i", "data.csv", "-v", "amount"]);

    assert_eq!(cli.labels, 2, "Default label count should be 2");
    assert_eq!(cli.records_slack, 0, "Default records slack should be 0");
    assert_eq!(cli.values_slack, 0, "Default values slack should be 0");
    assert_eq!(cli.records_name, "record");
    assert_eq!(cli.labels_name, "label");
    assert_eq!(cli.model_name, "");
    assert_eq!(cli.time_limit, 30, "Default time limit should be 30s");
    assert!(!cli.export_summary);
    assert!(!cli.no_confirm, "Default no_confirm should be false");
    assert_eq!(
        cli.infer_schema_length, 10000,
        "Default schema inference should be 10000"
    );
}

#[test]
fn test_cli_custom_parameters() {
    let cli = Cli::parse_from([
        "parteq",
        "-i",
        "data.csv",
        "-v",
        "amount",
        "-l",
        "4",
        "--records-slack",
        "2",
        "--values-slack",
        "10",
        "--time-limit",
        "120",
    ]);

    assert_eq!(cli.labels, 4);
    assert_eq!(cli.records_slack, 2);
    assert_eq!(cli.values_slack, 10);
    assert_eq!(cli.time_limit, 120);
}

#[test]
fn test_cli_zero_labels_rejected() {
    let result = Cli::try_parse_from(["parteq", "-i", "data.csv", "-v", "amount", "-l", "0"]);
    assert!(result.is_err(), "Zero labels should fail validation");
}

#[test]
fn test_cli_naming_prefixes() {
    let cli = Cli::parse_from([
        "parteq",
        "-i",
        "data.csv",
        "-v",
        "amount",
        "--records-name",
        "loan",
        "--labels-name",
        "bucket",
    ]);

    assert_eq!(cli.records_name, "loan");
    assert_eq!(cli.labels_name, "bucket");
}

#[test]
fn test_cli_output_path_derivation() {
    let cli = Cli::parse_from(["parteq", "-i", "/path/to/data.csv", "-v", "amount"]);
    assert_eq!(cli.output_path(), PathBuf::from("/path/to/data_assigned.csv"));
}

#[test]
fn test_cli_output_path_derivation_parquet() {
    let cli = Cli::parse_from(["parteq", "-i", "/path/to/data.parquet", "-v", "amount"]);
    assert_eq!(
        cli.output_path(),
        PathBuf::from("/path/to/data_assigned.parquet")
    );
}

#[test]
fn test_cli_explicit_output_path() {
    let cli = Cli::parse_from([
        "parteq",
        "-i",
        "data.csv",
        "-v",
        "amount",
        "-o",
        "custom_output.parquet",
    ]);
    assert_eq!(cli.output_path(), PathBuf::from("custom_output.parquet"));
}

#[test]
fn test_cli_summary_path() {
    let cli = Cli::parse_from(["parteq", "-i", "/data/myfile.csv", "-v", "amount"]);
    assert_eq!(
        cli.summary_path(),
        PathBuf::from("/data/myfile_assignment.json")
    );
}

fn write_csv(dir: &TempDir, name: &str, amounts: &[f64]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "id,amount").unwrap();
    for (i, amount) in amounts.iter().enumerate() {
        writeln!(file, "row{},{}", i, amount).unwrap();
    }
    path
}

#[test]
fn test_binary_assigns_and_writes_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_csv(&temp_dir, "data.csv", &[1.0; 10]);

    Command::cargo_bin("parteq")
        .unwrap()
        .args(["-i"])
        .arg(&input)
        .args(["-v", "amount", "-l", "2", "--no-confirm", "--export-summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    let output = temp_dir.path().join("data_assigned.csv");
    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.lines().next().unwrap().contains("assigned"));
    assert_eq!(content.lines().count(), 11); // header + 10 records

    let summary = temp_dir.path().join("data_assignment.json");
    let json = std::fs::read_to_string(&summary).unwrap();
    assert!(json.contains("\"n_labels\": 2"));
    assert!(json.contains("\"status\""));
}

#[test]
fn test_binary_reports_infeasible_model() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_csv(&temp_dir, "skewed.csv", &[10.0, 1.0, 1.0]);

    Command::cargo_bin("parteq")
        .unwrap()
        .args(["-i"])
        .arg(&input)
        .args(["-v", "amount", "-l", "2", "--no-confirm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No assignment found"));
}

#[test]
fn test_binary_rejects_missing_column() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_csv(&temp_dir, "data.csv", &[1.0; 4]);

    Command::cargo_bin("parteq")
        .unwrap()
        .args(["-i"])
        .arg(&input)
        .args(["-v", "missing", "--no-confirm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in dataset"));
}
