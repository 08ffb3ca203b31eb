//! Command-line argument types.

use clap::{Parser, Subcommand};

/// GDP record keeping with AI trend analysis
#[derive(Parser, Debug)]
#[command(name = "gdptrend")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (defaults to the platform config dir)
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        /// Use the in-memory store instead of the configured backend
        #[arg(long)]
        memory: bool,
    },
    /// Add a GDP record
    Add {
        /// Observation year, e.g. 2023
        #[arg(long)]
        year: String,
        /// GDP value, e.g. 23320.5
        #[arg(long)]
        value: String,
        /// Country label, e.g. "United States"
        #[arg(long)]
        country: String,
    },
    /// List all records, ascending by year
    List,
    /// Overwrite the value of an existing record
    SetValue {
        /// Record id
        id: String,
        /// New GDP value
        value: f64,
    },
    /// Delete a record by id
    Remove {
        /// Record id
        id: String,
    },
    /// Generate an AI trend summary of the collection
    Analyze,
    /// Configuration file operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `gdptrend config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Create a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
