//! Parteq: Balanced Partitioning CLI Tool
//!
//! Reads a tabular dataset, builds a binary assignment model over one
//! numeric column, solves it with HiGHS, and writes the table back out with
//! one appended label column.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use console::style;

use parteq::cli::{confirm_optimize, Cli};
use parteq::pipeline::{load_dataset, save_dataset, Optimizer, OptimizerParams, SolveStatus};
use parteq::report::{export_assignment_json, AssignmentSummary, RunMetadata};
use parteq::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_info, print_step_header, print_step_time, print_success, print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output_path = cli.output_path();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        &cli.input,
        &cli.values,
        &output_path,
        cli.labels,
        cli.records_slack,
        cli.values_slack,
        cli.time_limit,
    );

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(&cli.input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    print_step_time(step_start.elapsed());

    // Verify the values column exists before building the model
    let column_names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    if !column_names.contains(&cli.values) {
        anyhow::bail!(
            "Values column '{}' not found in dataset. Available columns: {:?}",
            cli.values,
            column_names
        );
    }

    // Step 2: Build the assignment model
    print_step_header(2, "Build Model");
    let step_start = Instant::now();
    let params = OptimizerParams {
        n_labels: cli.labels,
        records_slack: cli.records_slack,
        values_slack: cli.values_slack,
        records_name: cli.records_name.clone(),
        labels_name: cli.labels_name.clone(),
        model_name: cli.model_name.clone(),
    };
    let mut optimizer = Optimizer::new(df, &cli.values, params)?;
    print_success("Model built");
    print_info(&format!(
        "Per-label minimums: {} record(s), {:.2} value",
        optimizer.targets().records_mean as i64 - optimizer.records_slack() as i64,
        optimizer.targets().values_mean - optimizer.values_slack() as f64,
    ));
    print_info(&format!(
        "{} variables, {} constraints",
        optimizer.model().num_vars(),
        optimizer.model().constraints().len()
    ));
    print_step_time(step_start.elapsed());

    if !cli.no_confirm && !confirm_optimize(optimizer.n_records(), optimizer.n_labels())? {
        println!("Cancelled by user.");
        return Ok(());
    }

    // Step 3: Optimize
    print_step_header(3, "Optimize");
    let step_start = Instant::now();
    let spinner = create_spinner("Solving assignment model...");
    let status = optimizer.optimize(Duration::from_secs(cli.time_limit));
    if status.is_feasible() {
        finish_with_success(&spinner, &format!("Solver finished (status: {})", status));
    } else {
        finish_with_warning(&spinner, &format!("Solver finished (status: {})", status));
    }
    print_step_time(step_start.elapsed());

    if !status.is_feasible() {
        anyhow::bail!(
            "No assignment found (status: {}). Consider raising --records-slack, \
             --values-slack or --time-limit.",
            status
        );
    }
    if status == SolveStatus::TimeLimit {
        print_warning("Time limit reached; reporting the best-known assignment");
    }

    // Step 4: Decode and save
    print_step_header(4, "Save Results");
    let step_start = Instant::now();
    let labels = optimizer.assignments()?;
    let mut results = optimizer.results()?;
    save_dataset(&mut results, &output_path)?;
    print_success(&format!("Saved to {}", output_path.display()));

    let summary = AssignmentSummary::from_assignments(
        &labels,
        optimizer.values(),
        optimizer.n_labels(),
        optimizer.labels_name(),
        status.as_str(),
    );
    summary.display();

    if cli.export_summary {
        let summary_path = cli.summary_path();
        let metadata = RunMetadata::new(
            env!("CARGO_PKG_VERSION"),
            &cli.input,
            &cli.values,
            cli.labels,
            cli.records_slack,
            cli.values_slack,
            cli.time_limit,
        );
        export_assignment_json(&summary_path, &metadata, &summary)?;
        print_success(&format!("Summary exported to {}", summary_path.display()));
    }
    print_step_time(step_start.elapsed());

    print_completion();

    Ok(())
}
