//! CLI command implementations
//!
//! Every command follows the same boot sequence:
//! 1. Configuration load (file or defaults)
//! 2. Log threshold applied
//! 3. Inventory load (file or built-in)
//!
//! Then the command reads stdin and answers on stdout.

use std::path::Path;

use crate::observability::{log_event, log_event_with_fields, Event, Logger};

use super::args::Command;
use super::config::Config;
use super::errors::CliResult;
use super::io::{read_request, read_requests, write_error, write_json};
use super::session::Session;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Query { config } => query(config.as_deref()),
        Command::Categories { config } => categories(config.as_deref()),
        Command::Start { config } => start(config.as_deref()),
    }
}

/// Loads config and inventory into a ready session
pub fn boot(config_path: Option<&Path>) -> CliResult<Session> {
    let config = Config::load_or_default(config_path)?;
    Logger::set_min_severity(config.min_severity()?);

    log_event(Event::BootStart);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("log_level", config.log_level.as_str()),
            ("page_size", config.page_size.to_string().as_str()),
        ],
    );

    let defaults = config.query_defaults()?;
    let inventory = config.load_inventory()?;

    let source = match &config.inventory_path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };
    log_event_with_fields(
        Event::InventoryLoaded,
        &[
            ("records", inventory.len().to_string().as_str()),
            ("source", source.as_str()),
        ],
    );

    Ok(Session::new(inventory, defaults))
}

/// Execute a single query and exit
///
/// stdin carries one query object: `{"searchText":"chip","page":1,...}`.
pub fn query(config_path: Option<&Path>) -> CliResult<()> {
    let session = boot(config_path)?;
    let request = read_request()?;

    write_json(&session.handle_query(&request))
}

/// Print the category distribution and exit
pub fn categories(config_path: Option<&Path>) -> CliResult<()> {
    let session = boot(config_path)?;

    write_json(&session.handle_distribution())
}

/// Serve requests until stdin closes
///
/// Malformed lines are answered with an error and skipped; I/O errors end
/// the session.
pub fn start(config_path: Option<&Path>) -> CliResult<()> {
    let mut session = boot(config_path)?;
    let mut served: u64 = 0;

    for request_result in read_requests() {
        match request_result {
            Ok(request) => {
                write_json(&session.handle(&request))?;
                served += 1;
            }
            Err(e) if e.is_recoverable() => {
                log_event_with_fields(
                    Event::RequestMalformed,
                    &[("code", e.code_str()), ("message", e.message())],
                );
                write_error(e.code_str(), e.message())?;
            }
            Err(e) => {
                write_error(e.code_str(), e.message())?;
                return Err(e);
            }
        }
    }

    log_event_with_fields(
        Event::SessionEnd,
        &[
            ("requests", served.to_string().as_str()),
            ("version", session.inventory().version().to_string().as_str()),
        ],
    );

    Ok(())
}
