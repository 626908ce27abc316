//! Terminal rendering of environment records and validation results
//!
//! Record data goes to stdout; violations, warnings and notes go to stderr
//! so `show --json` and `get` stay pipeable.

pub mod table_output;

use crate::error::Result;
use console::style;
use serde::Serialize;

/// Pretty-printed JSON on stdout
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// One line per violated field
pub fn report_violations(violations: &[String]) {
    for violation in violations {
        eprintln!("{} {}", style("✗").red().bold(), style(violation).red());
    }
}

/// One line per non-fatal observation about a production record
pub fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", style("!").yellow().bold(), style(warning).yellow());
    }
}

/// Summary line for a record that passed validation
pub fn report_valid(production: bool) {
    println!("{} {}", style("✓").green().bold(), valid_summary(production));
}

/// Reminder printed after rendering the production example
pub fn note_empty_production_values() {
    eprintln!(
        "{} Production values are empty; fill them in before loading.",
        style("ℹ").blue()
    );
}

fn valid_summary(production: bool) -> String {
    let mode = if production { "production" } else { "development" };
    format!("Environment is valid ({mode} mode)")
}
