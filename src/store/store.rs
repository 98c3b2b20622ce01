//! Thread-safe entity store with optional write-through persistence

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info, warn};

use crate::model::{
    EntityId, EntityKind, Hero, HeroPower, NewHero, NewHeroPower, NewPower, Power, PowerUpdate,
};

use super::errors::{StoreError, StoreResult};
use super::snapshot::SnapshotFile;
use super::tables::{IntegrityReport, Tables};

/// Any stored row, tagged by kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Hero(Hero),
    Power(Power),
    HeroPower(HeroPower),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Hero(_) => EntityKind::Hero,
            Entity::Power(_) => EntityKind::Power,
            Entity::HeroPower(_) => EntityKind::HeroPower,
        }
    }

    pub fn id(&self) -> EntityId {
        match self {
            Entity::Hero(hero) => hero.id,
            Entity::Power(power) => power.id,
            Entity::HeroPower(hero_power) => hero_power.id,
        }
    }
}

/// Row counts per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub heroes: usize,
    pub powers: usize,
    pub hero_powers: usize,
}

/// The entity store.
///
/// Reads share a lock; each write holds the exclusive lock for its whole
/// validate-mutate-persist sequence, so concurrent writers are serialized
/// and readers never observe a half-applied write.
///
/// With a snapshot configured, a write that fails to persist is rolled
/// back in memory and reported as an error.
pub struct EntityStore {
    tables: RwLock<Tables>,
    snapshot: Option<SnapshotFile>,
}

impl EntityStore {
    /// Creates an empty store that lives only in memory.
    pub fn in_memory() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            snapshot: None,
        }
    }

    /// Opens a store persisted at `path`, loading the existing snapshot if
    /// there is one.
    ///
    /// # Errors
    ///
    /// Fails if the snapshot cannot be read, is corrupted, or violates
    /// referential integrity.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let snapshot = SnapshotFile::new(path);
        let tables = match snapshot.load()? {
            Some(tables) => {
                let report = tables.verify_integrity();
                if !report.is_clean() {
                    return Err(StoreError::corruption(format!(
                        "integrity check failed: dangling hero_powers {:?}, stale id counters {:?}",
                        report.dangling_hero_powers, report.stale_id_counters
                    )));
                }
                info!(
                    path = %snapshot.path().display(),
                    heroes = tables.hero_count(),
                    powers = tables.power_count(),
                    hero_powers = tables.hero_power_count(),
                    "loaded snapshot"
                );
                tables
            }
            None => {
                info!(path = %snapshot.path().display(), "no snapshot found, starting empty");
                Tables::default()
            }
        };

        Ok(Self {
            tables: RwLock::new(tables),
            snapshot: Some(snapshot),
        })
    }

    /// Snapshot location, if the store is persistent
    pub fn path(&self) -> Option<&Path> {
        self.snapshot.as_ref().map(SnapshotFile::path)
    }

    /// Runs `f` against a consistent view of all tables.
    pub fn read<R, F>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&Tables) -> R,
    {
        let tables = self.tables.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&tables))
    }

    /// Runs a mutation under the write lock and persists the result.
    fn write<R, F>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&mut Tables) -> StoreResult<R>,
    {
        let mut tables = self.tables.write().map_err(|_| StoreError::LockPoisoned)?;

        let Some(snapshot) = &self.snapshot else {
            return f(&mut tables);
        };

        let before = tables.clone();
        let result = f(&mut tables)?;
        if let Err(e) = snapshot.save(&tables) {
            warn!(error = %e, "snapshot write failed, rolling back");
            *tables = before;
            return Err(e);
        }
        Ok(result)
    }

    // ==================
    // Generic access
    // ==================

    /// Looks up a row of any kind.
    pub fn get(&self, kind: EntityKind, id: EntityId) -> StoreResult<Option<Entity>> {
        self.read(|t| match kind {
            EntityKind::Hero => t.hero(id).cloned().map(Entity::Hero),
            EntityKind::Power => t.power(id).cloned().map(Entity::Power),
            EntityKind::HeroPower => t.hero_power(id).cloned().map(Entity::HeroPower),
        })
    }

    /// Lists every row of a kind in id order.
    pub fn list(&self, kind: EntityKind) -> StoreResult<Vec<Entity>> {
        self.read(|t| match kind {
            EntityKind::Hero => t.heroes().cloned().map(Entity::Hero).collect(),
            EntityKind::Power => t.powers().cloned().map(Entity::Power).collect(),
            EntityKind::HeroPower => t.hero_powers().cloned().map(Entity::HeroPower).collect(),
        })
    }

    // ==================
    // Heroes
    // ==================

    pub fn get_hero(&self, id: EntityId) -> StoreResult<Option<Hero>> {
        debug!(id, "get hero");
        self.read(|t| t.hero(id).cloned())
    }

    pub fn list_heroes(&self) -> StoreResult<Vec<Hero>> {
        self.read(|t| t.heroes().cloned().collect())
    }

    pub fn create_hero(&self, new: NewHero) -> StoreResult<Hero> {
        let hero = self.write(|t| t.insert_hero(new))?;
        info!(id = hero.id, super_name = %hero.super_name, "created hero");
        Ok(hero)
    }

    /// Deletes a hero and its `hero_powers` rows. `Ok(false)` when absent.
    pub fn delete_hero(&self, id: EntityId) -> StoreResult<bool> {
        let removed = self.write(|t| Ok(t.remove_hero(id)))?;
        Ok(match removed {
            Some((_, cascaded)) => {
                info!(id, cascaded, "deleted hero");
                true
            }
            None => false,
        })
    }

    // ==================
    // Powers
    // ==================

    pub fn get_power(&self, id: EntityId) -> StoreResult<Option<Power>> {
        debug!(id, "get power");
        self.read(|t| t.power(id).cloned())
    }

    pub fn list_powers(&self) -> StoreResult<Vec<Power>> {
        self.read(|t| t.powers().cloned().collect())
    }

    pub fn create_power(&self, new: NewPower) -> StoreResult<Power> {
        let power = self.write(|t| t.insert_power(new))?;
        info!(id = power.id, name = %power.name, "created power");
        Ok(power)
    }

    /// Applies a partial update. `Ok(None)` when the power does not exist.
    pub fn update_power(&self, id: EntityId, update: PowerUpdate) -> StoreResult<Option<Power>> {
        let updated = self.write(|t| t.update_power(id, update))?;
        if updated.is_some() {
            info!(id, "updated power");
        }
        Ok(updated)
    }

    /// Deletes a power and its `hero_powers` rows. `Ok(false)` when absent.
    pub fn delete_power(&self, id: EntityId) -> StoreResult<bool> {
        let removed = self.write(|t| Ok(t.remove_power(id)))?;
        Ok(match removed {
            Some((_, cascaded)) => {
                info!(id, cascaded, "deleted power");
                true
            }
            None => false,
        })
    }

    // ==================
    // Hero powers
    // ==================

    pub fn get_hero_power(&self, id: EntityId) -> StoreResult<Option<HeroPower>> {
        self.read(|t| t.hero_power(id).cloned())
    }

    pub fn list_hero_powers(&self) -> StoreResult<Vec<HeroPower>> {
        self.read(|t| t.hero_powers().cloned().collect())
    }

    /// Inserts a join row after checking both references exist.
    pub fn create_hero_power(&self, new: NewHeroPower) -> StoreResult<HeroPower> {
        let hero_power = self.write(|t| t.insert_hero_power(new))?;
        info!(
            id = hero_power.id,
            hero_id = hero_power.hero_id,
            power_id = hero_power.power_id,
            strength = %hero_power.strength,
            "created hero power"
        );
        Ok(hero_power)
    }

    pub fn find_hero_powers_by_hero(&self, hero_id: EntityId) -> StoreResult<Vec<HeroPower>> {
        self.read(|t| t.hero_powers_by_hero(hero_id).cloned().collect())
    }

    pub fn find_hero_powers_by_power(&self, power_id: EntityId) -> StoreResult<Vec<HeroPower>> {
        self.read(|t| t.hero_powers_by_power(power_id).cloned().collect())
    }

    // ==================
    // Maintenance
    // ==================

    pub fn counts(&self) -> StoreResult<StoreCounts> {
        self.read(|t| StoreCounts {
            heroes: t.hero_count(),
            powers: t.power_count(),
            hero_powers: t.hero_power_count(),
        })
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        self.read(Tables::is_empty)
    }

    pub fn verify_integrity(&self) -> StoreResult<IntegrityReport> {
        self.read(Tables::verify_integrity)
    }
}

impl fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("path", &self.path())
            .finish_non_exhaustive()
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
