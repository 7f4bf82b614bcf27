//! Terminal styling helpers for pipeline progress output

use console::style;
use std::path::Path;

/// Print the run header with the selected crop, year and input file.
pub fn print_header(crop: &str, year: i32, input: &Path) {
    println!();
    println!(
        "{} {} / {}",
        style("agroplot").cyan().bold(),
        style(crop).white().bold(),
        style(year).white().bold()
    );
    println!("  input: {}", style(input.display()).dim());
    println!();
}

/// Print a pipeline step line.
pub fn print_step(message: &str) {
    println!("  {} {}", style("·").cyan().bold(), message);
}

/// Print a success line, usually with the written artifact path.
pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green().bold(), message);
}

/// Print a warning line for dropped or unresolved rows.
pub fn print_warn(message: &str) {
    println!("  {} {}", style("!").yellow().bold(), style(message).yellow());
}

/// Print the final completion line.
pub fn print_completion(out_dir: &Path) {
    println!();
    println!(
        "  {} {}",
        style("done").green().bold(),
        style(format!("4 charts written to {}", out_dir.display())).dim()
    );
    println!();
}
