//! Process-wide frozen environment
//!
//! The record is set once at startup and then handed out as
//! `&'static Environment`; every read returns the same instance.

use crate::environment::Environment;
use crate::loader::EnvironmentLoader;
use coffeeshop_common::{ConfigurationError, Result};
use once_cell::sync::OnceCell;
use tracing::debug;

static ENVIRONMENT: OnceCell<Environment> = OnceCell::new();

/// Validate `env` and freeze it for the rest of the process
pub fn init(env: Environment) -> Result<&'static Environment> {
    if ENVIRONMENT.get().is_some() {
        return Err(ConfigurationError::AlreadyInitialized);
    }
    env.validate_and_warn()?;
    freeze(&ENVIRONMENT, env)
}

/// Load with `loader` and freeze the result
pub fn init_from_loader(loader: EnvironmentLoader) -> Result<&'static Environment> {
    if ENVIRONMENT.get().is_some() {
        return Err(ConfigurationError::AlreadyInitialized);
    }
    let env = loader.load()?;
    freeze(&ENVIRONMENT, env)
}

/// The frozen environment, if one was initialized
pub fn get() -> Option<&'static Environment> {
    ENVIRONMENT.get()
}

/// The frozen environment, or `NotInitialized`
pub fn current() -> Result<&'static Environment> {
    ENVIRONMENT.get().ok_or(ConfigurationError::NotInitialized)
}

fn freeze(cell: &'static OnceCell<Environment>, env: Environment) -> Result<&'static Environment> {
    cell.set(env)
        .map_err(|_| ConfigurationError::AlreadyInitialized)?;
    debug!("Environment frozen for the process lifetime");
    cell.get().ok_or(ConfigurationError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Auth0Config;
    use crate::Profile;

    #[test]
    fn test_freeze_once() {
        static CELL: OnceCell<Environment> = OnceCell::new();

        let first = freeze(&CELL, Environment::for_profile(Profile::Development)).unwrap();
        let replacement = Environment::new(
            true,
            "https://api.coffee.example.com",
            Auth0Config::new("coffee.eu", "coffee-shop", "other", "https://coffee.example.com"),
        );
        assert_eq!(
            freeze(&CELL, replacement).unwrap_err(),
            ConfigurationError::AlreadyInitialized
        );

        let again = CELL.get().unwrap();
        assert!(std::ptr::eq(first, again));
        assert_eq!(again.api_server_url(), "http://127.0.0.1:5000");
    }
}
