//! CLI module for quotes-api
//!
//! Provides command-line interface for:
//! - serve: Open the database and serve HTTP
//! - seed: Bulk-load quotes from a text file

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, seed, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
