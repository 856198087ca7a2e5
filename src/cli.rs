use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kasha-site", version, about = "KaSha event site backend")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP server (default)
    Start,

    /// Test configuration and catalog validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Print the price table
    Catalog {
        /// Only show one event type and its add-on groups
        #[arg(short, long)]
        event_type: Option<String>,
    },

    /// Compute an estimate and print the quote
    Estimate {
        /// Event type id (defaults to the first in the catalog)
        #[arg(short, long)]
        event_type: Option<String>,

        /// Number of guests (defaults to estimator.default_guests)
        #[arg(short, long)]
        guests: Option<u32>,

        /// Add-on item id; repeat for several
        #[arg(short, long = "addon")]
        addons: Vec<String>,

        /// Print the result as JSON instead of the text quote
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration (with secrets masked)
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
