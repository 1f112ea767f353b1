//! Solver adapter: materializes the assignment model into good_lp / HiGHS.
//!
//! The model is handed over as plain data and turned into a fresh solver
//! problem on every call; good_lp problems are consumed by solving, so the
//! durable representation stays on our side. No retries, no inspection of
//! solver internals: the backend's terminal outcome maps onto `SolveStatus`
//! and the variable values are read back into a flat vector.

use std::time::{Duration, Instant};

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};

use super::constraints::ConstraintSense;
use super::model::AssignmentModel;
use super::status::SolveStatus;

/// Outcome of one optimize call: a status, plus the solved variable values
/// whenever the status permits reading them.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    pub values: Option<Vec<f64>>,
}

/// Solve the model under a wall-clock budget.
///
/// A solve that succeeds after consuming the full budget is reported as
/// `TimeLimit`: HiGHS then returns its best-known incumbent rather than a
/// proven optimum. Infeasibility is a modeled outcome, not an error.
pub fn solve_assignment(model: &AssignmentModel, time_limit: Duration) -> SolveOutcome {
    let mut vars = ProblemVariables::new();
    let handles: Vec<Variable> = (0..model.num_vars())
        .map(|_| vars.add(variable().binary()))
        .collect();

    let objective: Expression = model
        .objective()
        .iter()
        .zip(&handles)
        .map(|(&coeff, &var)| coeff * var)
        .sum();

    let mut problem = vars
        .minimise(objective)
        .using(default_solver)
        .set_time_limit(time_limit.as_secs_f64());

    for spec in model.constraints() {
        let lhs: Expression = spec
            .terms
            .iter()
            .map(|&(index, coeff)| coeff * handles[index])
            .sum();
        let bound = match spec.sense {
            ConstraintSense::GreaterOrEqual => constraint!(lhs >= spec.rhs),
            ConstraintSense::LessOrEqual => constraint!(lhs <= spec.rhs),
        };
        problem = problem.with(bound);
    }

    let started = Instant::now();
    match problem.solve() {
        Ok(solution) => {
            let assignment = handles.iter().map(|&var| solution.value(var)).collect();
            let status = if started.elapsed() >= time_limit {
                SolveStatus::TimeLimit
            } else {
                SolveStatus::Optimal
            };
            SolveOutcome {
                status,
                values: Some(assignment),
            }
        }
        Err(ResolutionError::Infeasible) => SolveOutcome {
            status: SolveStatus::Infeasible,
            values: None,
        },
        Err(_) => SolveOutcome {
            status: SolveStatus::NoSolution,
            values: None,
        },
    }
}
