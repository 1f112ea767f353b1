//! Constraint generation for the assignment model.
//!
//! Three independent families, generated in sequence. Each generator is pure
//! given the current balance targets and slacks, and none depends on the
//! output of another. Constraint names follow the original identifiers so a
//! rejected model can be traced back per label or per record.

use crate::pipeline::balance::BalanceTargets;

use super::model::AssignmentModel;

/// Direction of a linear inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    GreaterOrEqual,
    LessOrEqual,
}

/// One named linear constraint over flat variable indices.
#[derive(Debug, Clone)]
pub struct ConstraintSpec {
    pub name: String,
    /// (flat variable index, coefficient) pairs on the left-hand side.
    pub terms: Vec<(usize, f64)>,
    pub sense: ConstraintSense,
    pub rhs: f64,
}

/// Populate the model with all three constraint families.
pub fn populate(
    model: &mut AssignmentModel,
    targets: &BalanceTargets,
    records_slack: usize,
    values_slack: usize,
    records_name: &str,
    values_name: &str,
    labels_name: &str,
) {
    for spec in records_per_label(model, targets, records_slack, records_name, labels_name) {
        model.push_constraint(spec);
    }
    for spec in values_per_label(model, targets, values_slack, values_name, labels_name) {
        model.push_constraint(spec);
    }
    for spec in one_label_per_record(model, records_name) {
        model.push_constraint(spec);
    }
}

/// Record-count minimum, one constraint per label:
/// sum over records of x[i][j] >= records_mean - records_slack.
///
/// The right-hand side may go negative under a large slack; the constraint
/// is then trivially satisfied and left in place.
fn records_per_label(
    model: &AssignmentModel,
    targets: &BalanceTargets,
    records_slack: usize,
    records_name: &str,
    labels_name: &str,
) -> Vec<ConstraintSpec> {
    let grid = model.grid();
    let rhs = targets.records_mean as f64 - records_slack as f64;
    (0..grid.n_labels())
        .map(|label| ConstraintSpec {
            name: format!("{}_{}_{}", records_name, labels_name, label),
            terms: (0..grid.n_records())
                .map(|record| (grid.index(record, label), 1.0))
                .collect(),
            sense: ConstraintSense::GreaterOrEqual,
            rhs,
        })
        .collect()
}

/// Weight-sum minimum, one constraint per label:
/// sum over records of v[i] * x[i][j] >= values_mean - values_slack.
fn values_per_label(
    model: &AssignmentModel,
    targets: &BalanceTargets,
    values_slack: usize,
    values_name: &str,
    labels_name: &str,
) -> Vec<ConstraintSpec> {
    let grid = model.grid();
    let values = model.values();
    let rhs = targets.values_mean - values_slack as f64;
    (0..grid.n_labels())
        .map(|label| ConstraintSpec {
            name: format!("{}_{}_{}", values_name, labels_name, label),
            terms: (0..grid.n_records())
                .map(|record| (grid.index(record, label), values[record]))
                .collect(),
            sense: ConstraintSense::GreaterOrEqual,
            rhs,
        })
        .collect()
}

/// Mutual exclusivity, one constraint per record:
/// sum over labels of x[i][j] <= 1, so a record lands on at most one label
/// or stays unassigned.
fn one_label_per_record(model: &AssignmentModel, records_name: &str) -> Vec<ConstraintSpec> {
    let grid = model.grid();
    (0..grid.n_records())
        .map(|record| ConstraintSpec {
            name: format!("{}_{}_assigned", records_name, record),
            terms: (0..grid.n_labels())
                .map(|label| (grid.index(record, label), 1.0))
                .collect(),
            sense: ConstraintSense::LessOrEqual,
            rhs: 1.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> BalanceTargets {
        BalanceTargets {
            records_mean: 2,
            values_mean: 5.0,
        }
    }

    fn model() -> AssignmentModel {
        AssignmentModel::new(String::new(), vec![3.0, 1.0, 6.0], 2)
    }

    #[test]
    fn test_populate_generates_one_family_per_concern() {
        let mut model = model();
        populate(&mut model, &targets(), 0, 0, "record", "amount", "label");
        // 2 record-count + 2 weight-sum + 3 assignment
        assert_eq!(model.constraints().len(), 7);
    }

    #[test]
    fn test_record_count_constraint_shape() {
        let mut model = model();
        populate(&mut model, &targets(), 1, 0, "record", "amount", "label");
        let spec = &model.constraints()[0];
        assert_eq!(spec.name, "record_label_0");
        assert_eq!(spec.sense, ConstraintSense::GreaterOrEqual);
        assert_eq!(spec.rhs, 1.0); // records_mean 2 - slack 1
        // one unit term per record, all hitting label 0
        assert_eq!(spec.terms, vec![(0, 1.0), (2, 1.0), (4, 1.0)]);
    }

    #[test]
    fn test_weight_sum_constraint_uses_record_values() {
        let mut model = model();
        populate(&mut model, &targets(), 0, 2, "record", "amount", "label");
        let spec = &model.constraints()[3];
        assert_eq!(spec.name, "amount_label_1");
        assert_eq!(spec.rhs, 3.0); // values_mean 5 - slack 2
        assert_eq!(spec.terms, vec![(1, 3.0), (3, 1.0), (5, 6.0)]);
    }

    #[test]
    fn test_assignment_constraint_is_at_most_one() {
        let mut model = model();
        populate(&mut model, &targets(), 0, 0, "record", "amount", "label");
        let spec = &model.constraints()[4];
        assert_eq!(spec.name, "record_0_assigned");
        assert_eq!(spec.sense, ConstraintSense::LessOrEqual);
        assert_eq!(spec.rhs, 1.0);
        assert_eq!(spec.terms, vec![(0, 1.0), (1, 1.0)]);
    }

    #[test]
    fn test_slack_can_push_rhs_negative() {
        let mut model = model();
        populate(&mut model, &targets(), 5, 0, "record", "amount", "label");
        assert_eq!(model.constraints()[0].rhs, -3.0);
    }
}
