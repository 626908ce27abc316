use clap::{Subcommand, ValueEnum};

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the loaded environment
    Show,

    /// Print a single value
    Get {
        /// Configuration key (e.g. apiServerUrl, auth0.clientId, callback-url)
        key: String,
    },

    /// Check the environment and report every problem found
    Validate,

    /// Print a profile preset as an example configuration file
    Example {
        /// Output format of the example
        #[arg(long, value_enum, default_value_t = ExampleFormat::Toml)]
        format: ExampleFormat,
    },
}

/// File formats the loader accepts
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExampleFormat {
    Toml,
    Json,
}
