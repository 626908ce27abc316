//! # Coffee Shop Environment
//!
//! The runtime environment record of the coffee shop client: where the
//! backend API lives and how the Auth0 login is wired.
//!
//! The record is loaded once, validated, and then only read:
//!
//! ```no_run
//! use coffeeshop_env::{global, EnvironmentLoader, Profile};
//!
//! # fn main() -> coffeeshop_env::Result<()> {
//! let env = global::init_from_loader(EnvironmentLoader::new().profile(Profile::Development))?;
//! println!("API at {}", env.api_server_url());
//! # Ok(())
//! # }
//! ```

pub mod environment;
pub mod global;
pub mod keys;
pub mod loader;
pub mod profile;
pub mod validation;

pub use coffeeshop_common::{ConfigurationError, Result};
pub use environment::{Auth0Config, Environment};
pub use loader::EnvironmentLoader;
pub use profile::Profile;
