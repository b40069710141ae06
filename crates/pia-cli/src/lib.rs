//! pia CLI library
//!
//! Argument parsing, commands and output formatting for the `pia` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
