//! fin-cli library
//!
//! Argument parsing and command execution for the `fin` binary, exported so
//! tests can drive commands without spawning a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use runner::{render, run};
