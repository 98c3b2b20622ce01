//! Response shaping for heroesdb entities
//!
//! Each endpoint picks the fields it exposes through a typed [`FieldSet`].
//! Relation fields (`hero_powers`, `hero`, `power`) expand exactly one
//! level: a nested entity is always rendered from its plain columns, so
//! the Hero -> HeroPower -> Hero cycle cannot recurse.

mod entities;
mod fields;

pub use entities::{serialize_hero, serialize_hero_power, serialize_power};
pub use fields::{Field, FieldSet, HeroField, HeroPowerField, PowerField};
