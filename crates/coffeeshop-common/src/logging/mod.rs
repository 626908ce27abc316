//! Unified logging initialization for the coffee shop binaries
//!
//! The active filter is chosen in the following priority order:
//! 1. CLI flags (`-v/-q`) - highest priority
//! 2. RUST_LOG environment variable
//! 3. Binary-specific defaults - lowest priority

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolve the filter for the given verbosity without installing anything.
pub fn build_filter<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<EnvFilter> {
    let filter = match verbosity.log_level() {
        Some(log_level) => EnvFilter::try_new(log_level.to_string().to_ascii_lowercase())?,
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?,
    };
    Ok(filter)
}

/// Default filter that scopes `level` to the workspace crates a binary links.
///
/// `binary_name` may contain dashes; they are mapped to the underscore form
/// tracing uses for targets.
pub fn default_filter(binary_name: &str, level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    let mut targets = vec![binary_target];
    for lib in ["coffeeshop_cli", "coffeeshop_env", "coffeeshop_common"] {
        if !targets.iter().any(|t| t == lib) {
            targets.push(lib.to_string());
        }
    }
    targets
        .into_iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize logging with the specified verbosity level and default filter.
///
/// # Example
///
/// ```no_run
/// use clap::Parser;
/// use clap_verbosity_flag::{Verbosity, OffLevel};
/// use coffeeshop_common::logging;
///
/// #[derive(Parser)]
/// struct Args {
///     #[clap(flatten)]
///     verbosity: Verbosity<OffLevel>,
/// }
///
/// let args = Args::parse();
/// logging::init_logging(&args.verbosity, "coffeeshop_env=info").unwrap();
/// ```
pub fn init_logging<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<()> {
    let filter = build_filter(verbosity, default_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Initialize logging only when it was explicitly asked for.
///
/// User-facing commands print their results on stdout; diagnostics appear
/// only with `-v` or a `RUST_LOG` value. Returns whether a subscriber was installed.
pub fn init_cli_logging<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<bool> {
    if verbosity.log_level().is_some() || std::env::var("RUST_LOG").is_ok() {
        init_logging(verbosity, default_filter)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
