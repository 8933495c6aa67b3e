//! Output formatting for lint results.
//!
//! Violations are streamed to stderr as they are found (unless quiet); the
//! formatters here render the end-of-run view. Structured output keeps
//! operational failures separate from violations.

use anyhow::Result;
use futurelint_core::LintResult;

use crate::OutputFormat;

/// Prints the final result in the requested format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for failure in &result.failures {
        eprintln!("{failure}");
    }

    let color = if result.has_violations() {
        "\x1b[31m"
    } else if result.has_failures() {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} violation(s), {} failure(s) in {} file(s)\x1b[0m",
        color,
        result.violations.len(),
        result.failures.len(),
        result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}
