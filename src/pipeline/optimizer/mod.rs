//! Balanced assignment optimizer.
//!
//! Builds a binary optimization model that distributes weighted records
//! across a fixed number of labels so every label receives at least a mean
//! share of record count and of accumulated weight, with records allowed to
//! stay unassigned. Solving is delegated to HiGHS through good_lp; this
//! module owns the model, its rebuild rules, and the decoding of solutions
//! back onto the input table.

mod constraints;
mod decode;
mod error;
mod model;
mod solve;
mod status;

use std::time::Duration;

use polars::prelude::*;

use super::balance::{balance_targets, BalanceTargets};
use super::values::extract_values;

pub use constraints::{ConstraintSense, ConstraintSpec};
pub use decode::{ASSIGNED_COLUMN, NOT_ASSIGNED};
pub use error::OptimizerError;
pub use model::{AssignmentModel, VarGrid};
pub use solve::SolveOutcome;
pub use status::SolveStatus;

/// Mutable configuration of the optimizer.
///
/// `records_name` and `labels_name` are identifier prefixes baked into
/// generated constraint names; they are fixed once the optimizer is built.
#[derive(Debug, Clone)]
pub struct OptimizerParams {
    /// Number of labels to partition into.
    pub n_labels: usize,
    /// Permitted shortfall below the per-label record-count minimum.
    pub records_slack: usize,
    /// Permitted shortfall below the per-label weight-sum minimum.
    pub values_slack: usize,
    /// Prefix for record-keyed identifiers.
    pub records_name: String,
    /// Prefix for label-keyed identifiers and decoded label names.
    pub labels_name: String,
    /// Display name of the model.
    pub model_name: String,
}

impl Default for OptimizerParams {
    fn default() -> Self {
        Self {
            n_labels: 2,
            records_slack: 0,
            values_slack: 0,
            records_name: "record".to_string(),
            labels_name: "label".to_string(),
            model_name: String::new(),
        }
    }
}

/// The one mutation entry point. Every parameter change is expressed as a
/// tagged rebuild so invalidation is total and explicit instead of being
/// implied by individual setters.
#[derive(Debug, Clone)]
enum Rebuild {
    /// Variable shape changes: discard everything and rebuild.
    ReshapeLabels(usize),
    /// Thresholds change: constraints are regenerated, variables survive.
    ChangeSlack { records: usize, values: usize },
    /// Cosmetic: propagate the display name, nothing structural.
    Rename(String),
}

/// Owns the dataset, the derived balance state, the assignment model and
/// the most recent solve outcome.
pub struct Optimizer {
    dataset: DataFrame,
    values_name: String,
    params: OptimizerParams,
    values_sum: f64,
    targets: BalanceTargets,
    model: AssignmentModel,
    outcome: Option<SolveOutcome>,
}

impl Optimizer {
    /// Build an optimizer over `dataset`, reading record weights from the
    /// `values_name` column. Fails fast on an empty table, a zero label
    /// count, or a column that cannot serve as numeric weights.
    pub fn new(
        dataset: DataFrame,
        values_name: &str,
        params: OptimizerParams,
    ) -> Result<Self, OptimizerError> {
        if params.n_labels == 0 {
            return Err(OptimizerError::NoLabels);
        }
        if dataset.height() == 0 {
            return Err(OptimizerError::EmptyDataset);
        }

        let values = extract_values(&dataset, values_name)?;
        let values_sum = values.iter().sum();
        let targets = balance_targets(values.len(), params.n_labels, values_sum)?;

        let mut model =
            AssignmentModel::new(params.model_name.clone(), values, params.n_labels);
        constraints::populate(
            &mut model,
            &targets,
            params.records_slack,
            params.values_slack,
            &params.records_name,
            values_name,
            &params.labels_name,
        );

        Ok(Self {
            dataset,
            values_name: values_name.to_string(),
            params,
            values_sum,
            targets,
            model,
            outcome: None,
        })
    }

    pub fn n_records(&self) -> usize {
        self.model.grid().n_records()
    }

    pub fn n_labels(&self) -> usize {
        self.params.n_labels
    }

    pub fn records_slack(&self) -> usize {
        self.params.records_slack
    }

    pub fn values_slack(&self) -> usize {
        self.params.values_slack
    }

    pub fn values_name(&self) -> &str {
        &self.values_name
    }

    pub fn labels_name(&self) -> &str {
        &self.params.labels_name
    }

    pub fn model_name(&self) -> &str {
        &self.params.model_name
    }

    pub fn values_sum(&self) -> f64 {
        self.values_sum
    }

    /// Record weights in row order.
    pub fn values(&self) -> &[f64] {
        self.model.values()
    }

    /// Current balance targets (recomputed on every reshape).
    pub fn targets(&self) -> &BalanceTargets {
        &self.targets
    }

    /// The live model: variables, objective and named constraints.
    pub fn model(&self) -> &AssignmentModel {
        &self.model
    }

    /// Status of the most recent optimize call, if any.
    pub fn status(&self) -> Option<SolveStatus> {
        self.outcome.as_ref().map(|outcome| outcome.status)
    }

    /// Change the label count. The variable shape itself changes, so the
    /// whole model is discarded and rebuilt: targets recomputed, grid
    /// reallocated, objective and all three constraint families regenerated.
    pub fn set_n_labels(&mut self, n_labels: usize) -> Result<(), OptimizerError> {
        if n_labels == 0 {
            return Err(OptimizerError::NoLabels);
        }
        self.rebuild(Rebuild::ReshapeLabels(n_labels))
    }

    /// Relax or tighten the record-count minimum. Constraints are
    /// regenerated; the variable grid and objective survive.
    pub fn set_records_slack(&mut self, slack: usize) -> Result<(), OptimizerError> {
        self.rebuild(Rebuild::ChangeSlack {
            records: slack,
            values: self.params.values_slack,
        })
    }

    /// Relax or tighten the weight-sum minimum.
    pub fn set_values_slack(&mut self, slack: usize) -> Result<(), OptimizerError> {
        self.rebuild(Rebuild::ChangeSlack {
            records: self.params.records_slack,
            values: slack,
        })
    }

    /// Rename the model. No structural rebuild, and the cached solution
    /// stays valid: the adapter keeps no warm-start state keyed by name.
    pub fn set_model_name(&mut self, name: &str) -> Result<(), OptimizerError> {
        self.rebuild(Rebuild::Rename(name.to_string()))
    }

    fn rebuild(&mut self, kind: Rebuild) -> Result<(), OptimizerError> {
        match kind {
            Rebuild::ReshapeLabels(n_labels) => {
                self.params.n_labels = n_labels;
                self.targets = balance_targets(self.n_records(), n_labels, self.values_sum)?;
                self.model.reshape(n_labels);
                self.populate_constraints();
                self.outcome = None;
            }
            Rebuild::ChangeSlack { records, values } => {
                self.params.records_slack = records;
                self.params.values_slack = values;
                self.model.clear_constraints();
                self.populate_constraints();
                self.outcome = None;
            }
            Rebuild::Rename(name) => {
                self.params.model_name = name.clone();
                self.model.set_name(name);
            }
        }
        Ok(())
    }

    fn populate_constraints(&mut self) {
        constraints::populate(
            &mut self.model,
            &self.targets,
            self.params.records_slack,
            self.params.values_slack,
            &self.params.records_name,
            &self.values_name,
            &self.params.labels_name,
        );
    }

    /// Run the solver under a wall-clock budget and cache the outcome.
    pub fn optimize(&mut self, time_limit: Duration) -> SolveStatus {
        let outcome = solve::solve_assignment(&self.model, time_limit);
        let status = outcome.status;
        self.outcome = Some(outcome);
        status
    }

    /// Decoded label name per record, in row order.
    pub fn assignments(&self) -> Result<Vec<String>, OptimizerError> {
        let outcome = self
            .outcome
            .as_ref()
            .ok_or_else(|| OptimizerError::NoSolution {
                status: "not optimized".to_string(),
            })?;
        let assignment = match &outcome.values {
            Some(values) if outcome.status.is_feasible() => values,
            _ => {
                return Err(OptimizerError::NoSolution {
                    status: outcome.status.to_string(),
                })
            }
        };
        decode::decode_labels(&self.model, assignment, &self.params.labels_name)
    }

    /// The input table with one appended `assigned` column holding the
    /// decoded label name or the `"not assigned"` sentinel, row order
    /// preserved.
    pub fn results(&self) -> Result<DataFrame, OptimizerError> {
        let labels = self.assignments()?;
        decode::attach_labels(&self.dataset, labels)
    }
}
