//! Environment inspection handlers

use crate::cli::commands::ExampleFormat;
use crate::error::Result;
use crate::output::{self, table_output};
use coffeeshop_common::ConfigurationError;
use coffeeshop_env::{Environment, EnvironmentLoader, Profile};
use serde::Serialize;
use tracing::debug;

/// Outcome of `validate`, as printed with `--json`
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub production: bool,
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn for_environment(env: &Environment) -> Self {
        let violations = match env.validate() {
            Ok(()) => Vec::new(),
            Err(err) => match err.violations() {
                [] => vec![err.to_string()],
                details => details.to_vec(),
            },
        };
        let warnings = if violations.is_empty() {
            env.warnings()
        } else {
            Vec::new()
        };

        Self {
            valid: violations.is_empty(),
            production: env.production(),
            violations,
            warnings,
        }
    }
}

/// Handle `show`
pub fn handle_show(loader: &EnvironmentLoader, json: bool) -> Result<()> {
    let env = loader.load()?;
    output::report_warnings(&env.warnings());

    if json {
        output::print_json(&env)?;
    } else {
        table_output::display_environment(&env);
    }
    Ok(())
}

/// Handle `get <key>`
pub fn handle_get(loader: &EnvironmentLoader, key: &str) -> Result<()> {
    let env = loader.load()?;
    let value = env.get(key)?;
    output::report_warnings(&env.warnings());
    println!("{value}");
    Ok(())
}

/// Handle `validate`
pub fn handle_validate(loader: &EnvironmentLoader, json: bool) -> Result<()> {
    let env = loader.load_unvalidated()?;
    let report = ValidationReport::for_environment(&env);
    debug!(
        valid = report.valid,
        violations = report.violations.len(),
        "Validation finished"
    );

    if json {
        output::print_json(&report)?;
    } else {
        output::report_violations(&report.violations);
        output::report_warnings(&report.warnings);
        if report.valid {
            output::report_valid(report.production);
        }
    }

    if report.valid {
        Ok(())
    } else {
        Err(ConfigurationError::ValidationFailed {
            details: report.violations,
        }
        .into())
    }
}

/// Handle `example`
pub fn handle_example(profile: Profile, format: ExampleFormat) -> Result<()> {
    let rendered = match format {
        ExampleFormat::Toml => Environment::generate_example(profile)?,
        ExampleFormat::Json => Environment::for_profile(profile).to_json()?,
    };
    println!("{rendered}");
    if profile.is_production() {
        output::note_empty_production_values();
    }
    Ok(())
}
