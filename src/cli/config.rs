//! Process configuration
//!
//! Resolution order, later wins:
//! 1. built-in defaults (port 5555, in-memory store)
//! 2. JSON config file given with `--config`
//! 3. environment: `DB_URI`, `HOST`, `PORT`
//! 4. command-line flags
//!
//! Example file:
//!
//! ```json
//! {
//!   "server": { "host": "127.0.0.1", "port": 5555, "cors_origins": [] },
//!   "database": { "path": "./heroes.json" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::store::EntityStore;

use super::errors::{CliError, CliResult};

/// Store configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Snapshot file; `None` keeps the store in memory only
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from an optional file, then apply the process
    /// environment.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Apply `DB_URI`, `HOST` and `PORT` as looked up by `var`.
    pub fn apply_overrides<F>(&mut self, var: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(uri) = var("DB_URI").filter(|v| !v.is_empty()) {
            self.database.path = Some(database_path_from_uri(&uri));
        }

        if let Some(host) = var("HOST").filter(|v| !v.is_empty()) {
            self.server.host = host;
        }

        if let Some(port) = var("PORT").filter(|v| !v.is_empty()) {
            self.server.port = port.parse().map_err(|_| {
                CliError::config_error(format!("Invalid PORT '{}': expected 0-65535", port))
            })?;
        }

        Ok(())
    }

    /// Open the configured store
    pub fn open_store(&self) -> CliResult<EntityStore> {
        match &self.database.path {
            Some(path) => Ok(EntityStore::open(path)?),
            None => Ok(EntityStore::in_memory()),
        }
    }
}

/// Converts a database URI into a snapshot path.
///
/// `sqlite:///relative.db` and `sqlite:////absolute.db` follow the usual
/// three-slash convention; `file://` URIs and bare paths are also accepted.
pub fn database_path_from_uri(uri: &str) -> PathBuf {
    let path = uri
        .strip_prefix("sqlite:///")
        .or_else(|| uri.strip_prefix("file://"))
        .unwrap_or(uri);
    PathBuf::from(path)
}
