//! Balance target derivation.

use super::optimizer::OptimizerError;

/// Per-label baseline thresholds derived from the dataset and label count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceTargets {
    /// floor(record count / label count)
    pub records_mean: usize,
    /// floor(total weight / label count)
    pub values_mean: f64,
}

/// Derive the per-label means. A zero label count is a precondition
/// violation and is rejected before any model construction can divide by it.
///
/// The value mean floors toward negative infinity, so a negative total
/// weight behaves the same as Python-style floor division.
pub fn balance_targets(
    n_records: usize,
    n_labels: usize,
    values_sum: f64,
) -> Result<BalanceTargets, OptimizerError> {
    if n_labels == 0 {
        return Err(OptimizerError::NoLabels);
    }
    Ok(BalanceTargets {
        records_mean: n_records / n_labels,
        values_mean: (values_sum / n_labels as f64).floor(),
    })
}
