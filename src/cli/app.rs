use clap::{Parser, Subcommand};

use crate::api::client::{DEFAULT_ENDPOINT, DEFAULT_PER_PAGE};

/// Galeria: a terminal gallery of public-official records
#[derive(Parser)]
#[command(name = "galeria")]
#[command(version = "0.1.0")]
#[command(about = "Searchable, filterable gallery of public-official records")]
#[command(
    long_about = "Galeria fetches the public-official registry from its content API and renders it as a searchable, letter-filterable gallery with a detail view."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the gallery interactively
    Browse {
        /// Content-listing endpoint
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Page size requested from the endpoint
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: u32,
    },

    /// Fetch the listing once and print the normalized records
    Fetch {
        /// Content-listing endpoint
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Page size requested from the endpoint
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: u32,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Browse { .. } => "browse",
            Commands::Fetch { .. } => "fetch",
        }
    }

    /// Check if this command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Browse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_browse_defaults() {
        let cli = Cli::parse_from(["galeria", "browse"]);

        match cli.command {
            Commands::Browse { endpoint, per_page } => {
                assert_eq!(endpoint, DEFAULT_ENDPOINT);
                assert_eq!(per_page, DEFAULT_PER_PAGE);
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_browse_overrides() {
        let cli = Cli::parse_from([
            "galeria",
            "browse",
            "--endpoint",
            "https://example.org/wp-json/wp/v2/items",
            "--per-page",
            "25",
        ]);

        match cli.command {
            Commands::Browse { endpoint, per_page } => {
                assert_eq!(endpoint, "https://example.org/wp-json/wp/v2/items");
                assert_eq!(per_page, 25);
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_fetch_command() {
        let cli = Cli::parse_from(["galeria", "fetch", "--format", "json"]);

        match cli.command {
            Commands::Fetch {
                endpoint,
                per_page,
                format,
            } => {
                assert_eq!(endpoint, DEFAULT_ENDPOINT);
                assert_eq!(per_page, DEFAULT_PER_PAGE);
                assert_eq!(format, "json");
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_command_properties() {
        let browse = Commands::Browse {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            per_page: DEFAULT_PER_PAGE,
        };
        assert_eq!(browse.name(), "browse");
        assert!(browse.is_interactive());

        let fetch = Commands::Fetch {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            format: "text".to_string(),
        };
        assert_eq!(fetch.name(), "fetch");
        assert!(!fetch.is_interactive());
    }
}
