//! Decoding a solved assignment back onto the input table.

use polars::prelude::*;

use super::error::OptimizerError;
use super::model::AssignmentModel;

/// Sentinel value for records the solver left out of every label.
pub const NOT_ASSIGNED: &str = "not assigned";

/// Name of the column appended to the output table.
pub const ASSIGNED_COLUMN: &str = "assigned";

/// Read one label per record out of the solved variable values.
///
/// Exactly one set bit yields that label's display name, zero set bits
/// yields the sentinel, and several set bits is rejected: the assignment
/// constraint makes that unreachable for a conforming solver, so such a
/// solution is corrupt rather than ambiguous in a recoverable way.
pub fn decode_labels(
    model: &AssignmentModel,
    assignment: &[f64],
    labels_name: &str,
) -> Result<Vec<String>, OptimizerError> {
    let grid = model.grid();
    let mut labels = Vec::with_capacity(grid.n_records());
    for record in 0..grid.n_records() {
        let mut chosen = None;
        let mut count = 0;
        for label in 0..grid.n_labels() {
            if assignment[grid.index(record, label)] > 0.5 {
                count += 1;
                chosen.get_or_insert(label);
            }
        }
        match (chosen, count) {
            (Some(label), 1) => labels.push(format!("{}_{}", labels_name, label)),
            (None, _) => labels.push(NOT_ASSIGNED.to_string()),
            (Some(_), count) => {
                return Err(OptimizerError::AmbiguousAssignment { record, count })
            }
        }
    }
    Ok(labels)
}

/// Append the decoded labels to a copy of the dataset.
///
/// Labels are positional, so row order is the join key; the input table
/// passes through otherwise untouched.
pub fn attach_labels(
    dataset: &DataFrame,
    labels: Vec<String>,
) -> Result<DataFrame, OptimizerError> {
    let mut out = dataset.clone();
    out.with_column(Column::new(ASSIGNED_COLUMN.into(), labels))?;
    Ok(out)
}
