//! # Coffee Shop Common
//!
//! Shared building blocks for the coffee shop client crates:
//! - [`ConfigurationError`], the error every configuration path reports
//! - [`config::ConfigLoader`], the layered loading contract
//! - [`logging`], unified tracing initialisation for binaries

pub mod config;
pub mod error;
pub mod logging;

pub use error::{ConfigurationError, Result};
