//! Useful CLI library
//!
//! Command-line access to the `useful-core` text locator and sequence
//! partitioner. Input lines come from files or stdin; results are written
//! as plain text or JSON.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use commands::Cli;
pub use error::{CliError, CliResult};
