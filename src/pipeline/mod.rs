//! Pipeline module - dataset I/O and the assignment optimizer

pub mod balance;
pub mod loader;
pub mod optimizer;
pub mod values;

pub use balance::*;
pub use loader::*;
pub use optimizer::{
    Optimizer, OptimizerError, OptimizerParams, SolveStatus, ASSIGNED_COLUMN, NOT_ASSIGNED,
};
pub use values::*;
