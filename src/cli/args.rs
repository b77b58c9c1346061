//! CLI argument definitions using clap
//!
//! Commands:
//! - quotes-api serve --config <path>
//! - quotes-api seed --file <path> --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quotes API - serve a collection of quotations over HTTP
#[derive(Parser, Debug)]
#[command(name = "quotes-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./quotes-api.json")]
        config: PathBuf,
    },

    /// Bulk-load quotes from a `"text" ~ author` file
    Seed {
        /// Quotes file, one quote per line
        #[arg(long)]
        file: PathBuf,

        /// Path to configuration file
        #[arg(long, default_value = "./quotes-api.json")]
        config: PathBuf,
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
    fn test_serve_default_config() {
        let cli = Cli::try_parse_from(["quotes-api", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config } => assert_eq!(config, PathBuf::from("./quotes-api.json")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_seed_requires_file() {
        assert!(Cli::try_parse_from(["quotes-api", "seed"]).is_err());

        let cli =
            Cli::try_parse_from(["quotes-api", "seed", "--file", "quotes.txt"]).unwrap();
        assert!(matches!(cli.command, Command::Seed { file, .. } if file == PathBuf::from("quotes.txt")));
    }
}
