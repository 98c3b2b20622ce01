//! CLI argument definitions using clap
//!
//! Commands:
//! - heroesdb serve [--config <path>] [--database <path>] [--host <host>] [--port <port>] [--seed]
//! - heroesdb seed [--config <path>] [--database <path>]
//! - heroesdb check [--config <path>] [--database <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// heroesdb - heroes, powers, and the links between them over HTTP
#[derive(Parser, Debug)]
#[command(name = "heroesdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that opens the store
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Snapshot file backing the store (overrides config and DB_URI)
    #[arg(long)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the API server
    Serve {
        #[command(flatten)]
        store: StoreArgs,

        /// Host to bind to (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Load the sample data set into an empty store before serving
        #[arg(long)]
        seed: bool,
    },

    /// Load the sample data set into an empty store and exit
    Seed {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Open the store, verify referential integrity, and print row counts
    Check {
        #[command(flatten)]
        store: StoreArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
