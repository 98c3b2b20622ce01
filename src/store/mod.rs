//! Entity store for heroesdb
//!
//! Holds the `heroes`, `powers`, and `hero_powers` tables and enforces
//! their referential rules:
//! - ids are assigned by the store, increase monotonically, and are never reused
//! - a `hero_powers` row references an existing hero and power at insert time
//! - deleting a hero or a power cascades to its `hero_powers` rows
//! - validation runs before any mutation, so failed writes change nothing
//!
//! Lookups that miss return `Ok(None)`. Errors are reserved for invalid
//! input and for storage faults.
//!
//! When a snapshot path is configured, every committed mutation is written
//! through to disk before it becomes visible to readers.

mod errors;
mod seed;
mod snapshot;
mod store;
mod table;
mod tables;

pub use errors::{StoreError, StoreResult};
pub use seed::{seed_sample_data, SeedOutcome};
pub use snapshot::SnapshotFile;
pub use store::{Entity, EntityStore, StoreCounts};
pub use table::Table;
pub use tables::{IntegrityReport, Tables};
