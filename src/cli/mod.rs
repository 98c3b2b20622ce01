//! CLI module for heroesdb
//!
//! Provides command-line interface for:
//! - serve: open the store and serve the REST API
//! - seed: load the sample data set into an empty store
//! - check: verify store integrity and print row counts

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, StoreArgs};
pub use commands::{check, check_store, run_command, seed, serve};
pub use config::{database_path_from_uri, Config, DatabaseConfig};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
