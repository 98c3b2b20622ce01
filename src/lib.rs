//! heroesdb - heroes, powers, and hero-power links behind a JSON REST API
//!
//! Layers, leaf first:
//! - `model`: entity rows and candidate field sets
//! - `validation`: pure field-level rules run before every write
//! - `store`: tables with foreign keys, cascade delete, and snapshots
//! - `serializer`: typed per-endpoint field selection
//! - `rest_api` / `http_server`: the HTTP boundary
//! - `cli`: configuration and process commands

pub mod cli;
pub mod http_server;
pub mod logging;
pub mod model;
pub mod rest_api;
pub mod serializer;
pub mod store;
pub mod validation;
