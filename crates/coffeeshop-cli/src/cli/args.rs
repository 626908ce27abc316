use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{OffLevel, Verbosity};
use coffeeshop_env::{EnvironmentLoader, Profile};
use std::path::{Path, PathBuf};

/// Coffee shop client environment inspector
#[derive(Parser, Debug)]
#[command(
    name = "coffeeshop-env",
    version,
    about = "Inspect and validate the coffee shop client environment",
    long_about = "Inspect and validate the environment record of the coffee shop client.

The record is assembled from the profile preset, an optional TOML or JSON
file and COFFEESHOP_* environment variables, in that order.

EXAMPLES:
  coffeeshop-env show                          # Show the development environment
  coffeeshop-env --profile production validate # Check a production setup
  coffeeshop-env get auth0.callbackURL         # Print one value
  coffeeshop-env example --format json         # Print a starting file"
)]
pub struct Args {
    /// Configuration file path (.toml or .json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile preset to start from (development or production)
    #[arg(short, long, global = true)]
    pub profile: Option<Profile>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<OffLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Loader configured from the global flags
    pub fn loader(&self) -> EnvironmentLoader {
        let mut loader = EnvironmentLoader::new();
        if let Some(profile) = self.profile {
            loader = loader.profile(profile);
        }
        if let Some(path) = &self.config {
            loader = loader.file(expand_tilde(path));
        }
        loader
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let loader = self.loader();

        match self.command {
            Commands::Show => handlers::handle_show(&loader, self.json),
            Commands::Get { key } => handlers::handle_get(&loader, &key),
            Commands::Validate => handlers::handle_validate(&loader, self.json),
            Commands::Example { format } => {
                handlers::handle_example(self.profile.unwrap_or_default(), format)
            }
        }
    }
}

/// Expand tilde (~) in file paths to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(path_str) => PathBuf::from(shellexpand::tilde(path_str).as_ref()),
        None => path.to_path_buf(),
    }
}
