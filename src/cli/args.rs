//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Parteq - Partition weighted records into balanced label groups
#[derive(Parser, Debug)]
#[command(name = "parteq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Numeric column holding the record weights to balance
    #[arg(short = 'v', long)]
    pub values: String,

    /// Number of labels to partition the records into
    #[arg(short = 'l', long, default_value = "2", value_parser = validate_n_labels)]
    pub labels: usize,

    /// Permitted shortfall below the per-label record-count minimum.
    /// Each label must receive at least floor(records / labels) - slack records.
    #[arg(long, default_value = "0")]
    pub records_slack: usize,

    /// Permitted shortfall below the per-label value-sum minimum.
    /// Each label must accumulate at least floor(total / labels) - slack value.
    #[arg(long, default_value = "0")]
    pub values_slack: usize,

    /// Prefix for record-keyed identifiers in the model
    #[arg(long, default_value = "record")]
    pub records_name: String,

    /// Prefix for label-keyed identifiers and decoded label names
    #[arg(long, default_value = "label")]
    pub labels_name: String,

    /// Display name for the optimization model
    #[arg(long, default_value = "")]
    pub model_name: String,

    /// Solver time limit in seconds. When the budget runs out the
    /// best-known assignment is reported instead of a proven optimum.
    #[arg(long, default_value = "30")]
    pub time_limit: u64,

    /// Output file path (CSV or Parquet, determined by extension).
    /// Defaults to the input directory with an '_assigned' suffix
    /// (e.g., data.csv -> data_assigned.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a JSON summary of the assignment next to the input file
    #[arg(long, default_value = "false")]
    pub export_summary: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for a full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,
}

impl Cli {
    /// Get the output path, deriving from the input if not explicitly
    /// provided: same directory, '_assigned' suffix, same extension.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let parent = self
                .input
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."));
            let stem = self
                .input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            let extension = self
                .input
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("parquet");
            parent.join(format!("{}_assigned.{}", stem, extension))
        })
    }

    /// Path for the JSON summary export, derived from the input file.
    pub fn summary_path(&self) -> PathBuf {
        let parent = self
            .input
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."));
        let stem = self
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        parent.join(format!("{}_assignment.json", stem))
    }
}

/// Validator for the label count
fn validate_n_labels(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value == 0 {
        Err("labels must be at least 1".to_string())
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_n_labels() {
        assert_eq!(validate_n_labels("3"), Ok(3));
        assert!(validate_n_labels("0").is_err());
        assert!(validate_n_labels("two").is_err());
    }

    #[test]
    fn test_output_path_derivation() {
        let cli = Cli::parse_from(["parteq", "-i", "/data/records.csv", "-v", "amount"]);
        assert_eq!(
            cli.output_path(),
            PathBuf::from("/data/records_assigned.csv")
        );
        assert_eq!(
            cli.summary_path(),
            PathBuf::from("/data/records_assignment.json")
        );
    }

    #[test]
    fn test_explicit_output_wins() {
        let cli = Cli::parse_from([
            "parteq",
            "-i",
            "in.csv",
            "-v",
            "amount",
            "-o",
            "out.parquet",
        ]);
        assert_eq!(cli.output_path(), PathBuf::from("out.parquet"));
    }
}
