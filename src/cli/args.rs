//! CLI argument definitions using clap
//!
//! Commands:
//! - snackdb query [--config <path>]
//! - snackdb categories [--config <path>]
//! - snackdb start [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// snackdb - a deterministic snack inventory with a query engine
#[derive(Parser, Debug)]
#[command(name = "snackdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read one query from stdin, print one page and exit
    Query {
        /// Path to configuration file; built-in defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the category distribution of the inventory and exit
    Categories {
        /// Path to configuration file; built-in defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Serve requests from stdin, one JSON object per line
    Start {
        /// Path to configuration file; built-in defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_with_config() {
        let cli = Cli::try_parse_from(["snackdb", "query", "--config", "snack.json"]).unwrap();
        match cli.command {
            Command::Query { config } => {
                assert_eq!(config, Some(PathBuf::from("snack.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_config_is_optional() {
        let cli = Cli::try_parse_from(["snackdb", "start"]).unwrap();
        assert!(matches!(cli.command, Command::Start { config: None }));
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["snackdb", "serve"]).is_err());
    }
}
