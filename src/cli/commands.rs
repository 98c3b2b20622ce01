//! CLI command implementations

use std::sync::Arc;

use tracing::info;

use crate::http_server::HttpServer;
use crate::store::{seed_sample_data, EntityStore, SeedOutcome};

use super::args::{Command, StoreArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            store,
            host,
            port,
            seed,
        } => {
            let mut config = resolve_config(&store)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config, seed)
        }
        Command::Seed { store } => seed(&resolve_config(&store)?),
        Command::Check { store } => check(&resolve_config(&store)?),
    }
}

/// Loads the config file and environment, then applies `--database`.
fn resolve_config(args: &StoreArgs) -> CliResult<Config> {
    let mut config = Config::load(args.config.as_deref())?;
    apply_store_args(&mut config, args);
    Ok(config)
}

fn apply_store_args(config: &mut Config, args: &StoreArgs) {
    if let Some(path) = &args.database {
        config.database.path = Some(path.clone());
    }
}

/// Open the store and serve the API until interrupted.
pub fn serve(config: Config, seed_first: bool) -> CliResult<()> {
    let store = config.open_store()?;
    if config.database.path.is_none() {
        info!("no database path configured, data will not survive a restart");
    }
    if seed_first {
        seed_sample_data(&store)?;
    }

    let server = HttpServer::with_config(config.server, Arc::new(store));
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Seed the configured store.
pub fn seed(config: &Config) -> CliResult<()> {
    if config.database.path.is_none() {
        return Err(CliError::config_error(
            "seed needs a database path (--database, DB_URI, or config file)",
        ));
    }

    let store = config.open_store()?;
    match seed_sample_data(&store)? {
        SeedOutcome::Seeded(counts) => println!(
            "Seeded {} heroes, {} powers, {} hero powers",
            counts.heroes, counts.powers, counts.hero_powers
        ),
        SeedOutcome::Skipped => println!("Database already contains data, nothing seeded"),
    }
    Ok(())
}

/// Verify the configured store and print its row counts.
pub fn check(config: &Config) -> CliResult<()> {
    let store = config.open_store()?;
    let report = check_store(&store)?;
    println!("{}", report);
    Ok(())
}

/// Runs the integrity scan and renders a one-line summary.
pub fn check_store(store: &EntityStore) -> CliResult<String> {
    let integrity = store.verify_integrity()?;
    if !integrity.is_clean() {
        return Err(CliError::Integrity(format!(
            "dangling hero_powers {:?}, stale id counters {:?}",
            integrity.dangling_hero_powers, integrity.stale_id_counters
        )));
    }

    let counts = store.counts()?;
    Ok(format!(
        "OK: {} heroes, {} powers, {} hero powers",
        counts.heroes, counts.powers, counts.hero_powers
    ))
}
