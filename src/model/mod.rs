//! Entity definitions for heroesdb
//!
//! Three tables make up the relational schema:
//! - `heroes`: named characters, read-only over the API
//! - `powers`: abilities with a validated description
//! - `hero_powers`: join rows linking a hero to a power with a strength
//!
//! Relations are one-directional: a `HeroPower` carries the foreign keys,
//! and the parents never hold back-references. Traversal from a parent to
//! its join rows goes through explicit store queries.

mod hero;
mod hero_power;
mod power;
mod strength;

pub use hero::{Hero, NewHero};
pub use hero_power::{HeroPower, NewHeroPower};
pub use power::{NewPower, Power, PowerUpdate};
pub use strength::Strength;

/// Row identifier assigned by the store
pub type EntityId = i64;

/// The kinds of entity held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Hero,
    Power,
    HeroPower,
}

impl EntityKind {
    /// Table name backing this kind
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Hero => "heroes",
            EntityKind::Power => "powers",
            EntityKind::HeroPower => "hero_powers",
        }
    }

    /// Display name used in not-found messages
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Hero => "Hero",
            EntityKind::Power => "Power",
            EntityKind::HeroPower => "HeroPower",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table_name())
    }
}
