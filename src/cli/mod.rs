//! CLI module for snackdb
//!
//! Provides command-line interface for:
//! - query: one-shot query execution
//! - categories: one-shot category distribution
//! - start: request loop over stdin

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod session;

pub use args::{Cli, Command};
pub use commands::{boot, categories, query, run, run_command, start};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_response, ok_response, read_request, write_error, write_json};
pub use session::Session;
