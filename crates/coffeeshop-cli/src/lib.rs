//! # Coffee Shop Environment CLI
//!
//! Command-line inspection of the client environment record:
//! - `show`, `get`: read the loaded record
//! - `validate`: report every violation instead of stopping at the first
//! - `example`: print a profile preset as a starting file

pub mod cli;
pub mod error;
pub mod output;

pub use cli::*;
pub use error::*;
