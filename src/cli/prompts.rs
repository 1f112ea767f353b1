//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm running the solver
pub fn confirm_optimize(n_records: usize, n_labels: usize) -> Result<bool> {
    let message = format!(
        "Partition {} record(s) into {} label(s)?",
        n_records, n_labels
    );
    confirm_step(&message)
}
