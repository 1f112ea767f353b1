//! Terminal styling utilities for a modern, visually appealing CLI

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static SCALE: Emoji<'_, '_> = Emoji("⚖️  ", "");
pub static CLOCK: Emoji<'_, '_> = Emoji("⏱️  ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗  █████╗ ██████╗ ████████╗███████╗ ██████╗
    ██╔══██╗██╔══██╗██╔══██╗╚══██╔══╝██╔════╝██╔═══██╗
    ██████╔╝███████║██████╔╝   ██║   █████╗  ██║   ██║
    ██╔═══╝ ██╔══██║██╔══██╗   ██║   ██╔══╝  ██║▄▄ ██║
    ██║     ██║  ██║██║  ██║   ██║   ███████╗╚██████╔╝
    ╚═╝     ╚═╝  ╚═╝╚═╝  ╚═╝   ╚═╝   ╚══════╝ ╚══▀▀═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("≡").magenta().bold(),
        style("Balanced partitioning for weighted records").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(
    input: &Path,
    values: &str,
    output: &Path,
    n_labels: usize,
    records_slack: usize,
    values_slack: usize,
    time_limit: u64,
) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:  {:<39}│",
        FOLDER,
        truncate_path(input, 38)
    );
    println!(
        "    │  {} Values: {:<39}│",
        TARGET,
        truncate_string(values, 38)
    );
    println!("    │  {} Output: {:<39}│", SAVE, truncate_path(output, 38));
    println!("    ├{}┤", line);
    println!(
        "    │  {} Labels:       {:<26}│",
        SCALE,
        style(n_labels).yellow()
    );
    println!(
        "    │  {} Slack (n/v):  {:<26}│",
        CHART,
        style(format!("{} / {}", records_slack, values_slack)).yellow()
    );
    println!(
        "    │  {} Time limit:   {:<26}│",
        CLOCK,
        style(format!("{}s", time_limit)).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!(
        "    {} {}",
        style("✓").green().bold(),
        style(message).green()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", style("ℹ").blue(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!(
        "    {} {}",
        style("!").yellow().bold(),
        style(message).yellow()
    );
}

/// Print the elapsed time of a step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("({:.2}s)", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        style("✦").magenta().bold(),
        style("Done.").white().bold()
    );
    println!();
}

/// Truncate a path for display, keeping the tail
fn truncate_path(path: &Path, max_len: usize) -> String {
    truncate_string(&path.display().to_string(), max_len)
}

/// Truncate a string for display, keeping the tail
fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 1)..].iter().collect();
        format!("…{}", tail)
    }
}
