//! Error types for the assignment optimizer.
//!
//! Every failure mode of model construction, mutation and decoding is a
//! variant here. Pipeline-level I/O keeps using `anyhow`; this enum is the
//! typed surface callers can match on.

use polars::error::PolarsError;
use thiserror::Error;

/// Errors raised by the assignment optimizer.
#[derive(Debug, Error)]
pub enum OptimizerError {
    /// The model needs at least one label to partition into.
    #[error("number of labels must be at least 1")]
    NoLabels,

    /// The input table has zero rows, so there is nothing to assign.
    #[error("dataset contains no records")]
    EmptyDataset,

    /// The designated values column does not exist in the input table.
    #[error("values column '{column}' not found in dataset")]
    MissingColumn { column: String },

    /// The designated values column cannot be read as Float64.
    #[error("values column '{column}' must be numeric (cannot cast to Float64)")]
    NonNumericColumn { column: String },

    /// A record has no value; every record needs a weight.
    #[error("values column '{column}' contains a null at row {row}")]
    NullValue { column: String, row: usize },

    /// NaN and infinite weights would poison the objective and constraints.
    #[error("values column '{column}' contains a non-finite value at row {row}")]
    NonFiniteValue { column: String, row: usize },

    /// Results were requested without a usable solution. Carries the
    /// observed solver status ("not optimized" when optimize was never run).
    #[error("no solution to get results from (status: {status})")]
    NoSolution { status: String },

    /// A record reads as assigned to several labels at once. The assignment
    /// constraint rules this out for any conforming solver, so a solution
    /// exhibiting it is corrupt and is rejected rather than tie-broken.
    #[error("record {record} is assigned to {count} labels in the solved model")]
    AmbiguousAssignment { record: usize, count: usize },

    /// Column append or other DataFrame operation failed.
    #[error("dataframe operation failed: {0}")]
    DataFrame(#[from] PolarsError),
}
