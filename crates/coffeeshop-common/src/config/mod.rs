//! Configuration loading contract

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Layered configuration loading: defaults, then a file, then the environment.
pub trait ConfigLoader<T> {
    /// Load from an optional file path, falling back to the implementor's default location
    fn load(path: Option<PathBuf>) -> Result<T>;

    /// Load from a specific file, which must exist
    fn load_from_file(path: &Path) -> Result<T>;

    /// Apply environment variable overrides carrying `prefix` on top of `config`
    fn apply_env_overrides(config: &mut T, prefix: &str) -> Result<()>;
}
