//! CLI-specific error types
//!
//! All CLI errors end the process with a non-zero status.

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("HEROES_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Store could not be opened or written
    #[error("HEROES_CLI_STORE_ERROR: {0}")]
    Store(#[from] StoreError),

    /// Server or runtime failure
    #[error("HEROES_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    /// Integrity check found violations
    #[error("HEROES_CLI_INTEGRITY_ERROR: {0}")]
    Integrity(String),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            CliError::Config(_) => "HEROES_CLI_CONFIG_ERROR",
            CliError::Store(_) => "HEROES_CLI_STORE_ERROR",
            CliError::Io(_) => "HEROES_CLI_IO_ERROR",
            CliError::Integrity(_) => "HEROES_CLI_INTEGRITY_ERROR",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
