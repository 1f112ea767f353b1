//! Assignment model storage and construction.
//!
//! The model is plain data: a grid of binary decision variables addressed by
//! (record, label), one objective coefficient per variable, and a list of
//! named linear constraints. It is materialized into a solver problem only
//! at solve time, so reshaping and regenerating constraints are cheap local
//! operations on this structure.

use super::constraints::ConstraintSpec;

/// Two-dimensional index-addressed store of binary decision variables.
///
/// Variables are stored flat in record-major order; the shape is part of the
/// store so reshaping the label dimension is a single explicit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarGrid {
    n_records: usize,
    n_labels: usize,
}

impl VarGrid {
    pub fn new(n_records: usize, n_labels: usize) -> Self {
        Self {
            n_records,
            n_labels,
        }
    }

    pub fn n_records(&self) -> usize {
        self.n_records
    }

    pub fn n_labels(&self) -> usize {
        self.n_labels
    }

    /// Total number of decision variables in the grid.
    pub fn len(&self) -> usize {
        self.n_records * self.n_labels
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat offset of the variable for (record, label).
    pub fn index(&self, record: usize, label: usize) -> usize {
        debug_assert!(record < self.n_records, "record index out of range");
        debug_assert!(label < self.n_labels, "label index out of range");
        record * self.n_labels + label
    }

    /// Change the label dimension; record count is fixed by the dataset.
    pub fn reshape(&mut self, n_labels: usize) {
        self.n_labels = n_labels;
    }
}

/// The live aggregate of variables, objective and constraints.
#[derive(Debug, Clone)]
pub struct AssignmentModel {
    name: String,
    grid: VarGrid,
    values: Vec<f64>,
    objective: Vec<f64>,
    constraints: Vec<ConstraintSpec>,
}

impl AssignmentModel {
    /// Allocate the variable grid and objective for `values.len()` records
    /// and `n_labels` labels. Constraints are generated separately.
    ///
    /// The objective minimizes the total weight of all assigned records:
    /// the coefficient of x[i][j] is the weight of record i, for every j.
    /// Balance between labels comes from the constraint minimums, not from
    /// the objective.
    pub fn new(name: String, values: Vec<f64>, n_labels: usize) -> Self {
        let grid = VarGrid::new(values.len(), n_labels);
        let objective = build_objective(&values, &grid);
        Self {
            name,
            grid,
            values,
            objective,
            constraints: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn grid(&self) -> &VarGrid {
        &self.grid
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Objective coefficients, one per flat variable index.
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[ConstraintSpec] {
        &self.constraints
    }

    pub fn num_vars(&self) -> usize {
        self.grid.len()
    }

    /// Discard every variable and constraint and reallocate the grid at a
    /// new label count. The caller regenerates the constraint families.
    pub fn reshape(&mut self, n_labels: usize) {
        self.constraints.clear();
        self.grid.reshape(n_labels);
        self.objective = build_objective(&self.values, &self.grid);
    }

    /// Discard the constraint set, keeping the grid and objective intact.
    pub fn clear_constraints(&mut self) {
        self.constraints.clear();
    }

    pub fn push_constraint(&mut self, spec: ConstraintSpec) {
        self.constraints.push(spec);
    }
}

fn build_objective(values: &[f64], grid: &VarGrid) -> Vec<f64> {
    let mut objective = Vec::with_capacity(grid.len());
    for &value in values {
        for _ in 0..grid.n_labels() {
            objective.push(value);
        }
    }
    objective
}
