//! The relational schema: three tables and the rules binding them

use serde::{Deserialize, Serialize};

use crate::model::{
    EntityId, Hero, HeroPower, NewHero, NewHeroPower, NewPower, Power, PowerUpdate,
};
use crate::validation::{
    validate_hero_names, validate_hero_power_references, validate_power_description,
    ReferenceLookup,
};

use super::errors::StoreResult;
use super::table::Table;

/// All tables of the store.
///
/// Mutators validate first and mutate second, so an `Err` leaves the
/// tables exactly as they were.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    heroes: Table<Hero>,
    powers: Table<Power>,
    hero_powers: Table<HeroPower>,
}

/// Outcome of a referential integrity scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// `hero_powers` ids whose hero or power no longer exists
    pub dangling_hero_powers: Vec<EntityId>,
    /// Tables whose id counter would hand out an id already in use
    pub stale_id_counters: Vec<&'static str>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.dangling_hero_powers.is_empty() && self.stale_id_counters.is_empty()
    }
}

impl Tables {
    // ==================
    // Reads
    // ==================

    pub fn hero(&self, id: EntityId) -> Option<&Hero> {
        self.heroes.get(id)
    }

    pub fn power(&self, id: EntityId) -> Option<&Power> {
        self.powers.get(id)
    }

    pub fn hero_power(&self, id: EntityId) -> Option<&HeroPower> {
        self.hero_powers.get(id)
    }

    pub fn heroes(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter()
    }

    pub fn powers(&self) -> impl Iterator<Item = &Power> {
        self.powers.iter()
    }

    pub fn hero_powers(&self) -> impl Iterator<Item = &HeroPower> {
        self.hero_powers.iter()
    }

    /// Join rows owned by a hero, in insertion order
    pub fn hero_powers_by_hero(&self, hero_id: EntityId) -> impl Iterator<Item = &HeroPower> {
        self.hero_powers.iter().filter(move |hp| hp.hero_id == hero_id)
    }

    /// Join rows owned by a power, in insertion order
    pub fn hero_powers_by_power(&self, power_id: EntityId) -> impl Iterator<Item = &HeroPower> {
        self.hero_powers.iter().filter(move |hp| hp.power_id == power_id)
    }

    pub fn hero_count(&self) -> usize {
        self.heroes.len()
    }

    pub fn power_count(&self) -> usize {
        self.powers.len()
    }

    pub fn hero_power_count(&self) -> usize {
        self.hero_powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty() && self.powers.is_empty() && self.hero_powers.is_empty()
    }

    // ==================
    // Writes
    // ==================

    pub(crate) fn insert_hero(&mut self, new: NewHero) -> StoreResult<Hero> {
        validate_hero_names(&new.name, &new.super_name)?;

        let hero = self.heroes.insert_with(|id| Hero {
            id,
            name: new.name,
            super_name: new.super_name,
        });
        Ok(hero.clone())
    }

    pub(crate) fn insert_power(&mut self, new: NewPower) -> StoreResult<Power> {
        validate_power_description(Some(&new.description))?;

        let power = self.powers.insert_with(|id| Power {
            id,
            name: new.name,
            description: new.description,
        });
        Ok(power.clone())
    }

    pub(crate) fn insert_hero_power(&mut self, new: NewHeroPower) -> StoreResult<HeroPower> {
        validate_hero_power_references(new.hero_id, new.power_id, &*self)?;

        let hero_power = self.hero_powers.insert_with(|id| HeroPower {
            id,
            strength: new.strength,
            hero_id: new.hero_id,
            power_id: new.power_id,
        });
        Ok(hero_power.clone())
    }

    /// Applies a partial update. `Ok(None)` when the power does not exist;
    /// existence is checked before the update is validated.
    pub(crate) fn update_power(
        &mut self,
        id: EntityId,
        update: PowerUpdate,
    ) -> StoreResult<Option<Power>> {
        let Some(power) = self.powers.get_mut(id) else {
            return Ok(None);
        };

        if let Some(description) = update.description {
            validate_power_description(Some(&description))?;
            power.description = description;
        }

        Ok(Some(power.clone()))
    }

    /// Removes a hero and its join rows. Returns the hero and the number of
    /// cascaded rows.
    pub(crate) fn remove_hero(&mut self, id: EntityId) -> Option<(Hero, usize)> {
        let hero = self.heroes.remove(id)?;
        let cascaded = self.hero_powers.retain(|hp| hp.hero_id != id);
        Some((hero, cascaded))
    }

    /// Removes a power and its join rows. Returns the power and the number
    /// of cascaded rows.
    pub(crate) fn remove_power(&mut self, id: EntityId) -> Option<(Power, usize)> {
        let power = self.powers.remove(id)?;
        let cascaded = self.hero_powers.retain(|hp| hp.power_id != id);
        Some((power, cascaded))
    }

    // ==================
    // Integrity
    // ==================

    /// Scans for rows that violate the foreign-key and id rules.
    ///
    /// Mutations through this type cannot produce violations; the scan
    /// exists for tables decoded from a snapshot.
    pub fn verify_integrity(&self) -> IntegrityReport {
        let dangling_hero_powers = self
            .hero_powers
            .iter()
            .filter(|hp| !self.heroes.contains(hp.hero_id) || !self.powers.contains(hp.power_id))
            .map(|hp| hp.id)
            .collect();

        let mut stale_id_counters = Vec::new();
        if counter_is_stale(&self.heroes) {
            stale_id_counters.push("heroes");
        }
        if counter_is_stale(&self.powers) {
            stale_id_counters.push("powers");
        }
        if counter_is_stale(&self.hero_powers) {
            stale_id_counters.push("hero_powers");
        }

        IntegrityReport {
            dangling_hero_powers,
            stale_id_counters,
        }
    }
}

fn counter_is_stale<T>(table: &Table<T>) -> bool {
    table.max_id().is_some_and(|max| table.next_id() <= max)
}

impl ReferenceLookup for Tables {
    fn hero_exists(&self, id: EntityId) -> bool {
        self.heroes.contains(id)
    }

    fn power_exists(&self, id: EntityId) -> bool {
        self.powers.contains(id)
    }
}
