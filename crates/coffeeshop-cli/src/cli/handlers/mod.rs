//! Command handlers for the environment CLI

pub mod environment;

pub use environment::{handle_example, handle_get, handle_show, handle_validate};
