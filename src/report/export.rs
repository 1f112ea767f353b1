//! Assignment summary export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use super::summary::AssignmentSummary;

/// Metadata about the optimization run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Parteq version
    pub parteq_version: String,
    /// Input file path
    pub input_file: String,
    /// Values column name
    pub values_column: String,
    /// Number of labels
    pub n_labels: usize,
    /// Record-count slack
    pub records_slack: usize,
    /// Weight-sum slack
    pub values_slack: usize,
    /// Solver time limit in seconds
    pub time_limit_seconds: u64,
}

impl RunMetadata {
    pub fn new(
        version: &str,
        input_file: &Path,
        values_column: &str,
        n_labels: usize,
        records_slack: usize,
        values_slack: usize,
        time_limit_seconds: u64,
    ) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            parteq_version: version.to_string(),
            input_file: input_file.display().to_string(),
            values_column: values_column.to_string(),
            n_labels,
            records_slack,
            values_slack,
            time_limit_seconds,
        }
    }
}

/// Complete assignment export with metadata
#[derive(Serialize)]
struct AssignmentExport<'a> {
    metadata: &'a RunMetadata,
    summary: &'a AssignmentSummary,
}

/// Write the assignment summary and run metadata as pretty-printed JSON
pub fn export_assignment_json(
    path: &Path,
    metadata: &RunMetadata,
    summary: &AssignmentSummary,
) -> Result<()> {
    let export = AssignmentExport { metadata, summary };
    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize assignment summary")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary file: {}", path.display()))?;
    Ok(())
}
