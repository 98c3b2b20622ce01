//! Entity to JSON conversion

use serde_json::{Map, Value};

use crate::model::{Hero, HeroPower, Power};
use crate::store::Tables;

use super::fields::{Field, FieldSet, HeroField, HeroPowerField, PowerField};

fn hero_columns(hero: &Hero, fields: &FieldSet<HeroField>) -> Map<String, Value> {
    let mut out = Map::new();
    for field in fields.iter() {
        let value = match field {
            HeroField::Id => Value::from(hero.id),
            HeroField::Name => Value::from(hero.name.as_str()),
            HeroField::SuperName => Value::from(hero.super_name.as_str()),
            HeroField::HeroPowers => continue,
        };
        out.insert(field.name().to_string(), value);
    }
    out
}

fn power_columns(power: &Power, fields: &FieldSet<PowerField>) -> Map<String, Value> {
    let mut out = Map::new();
    for field in fields.iter() {
        let value = match field {
            PowerField::Id => Value::from(power.id),
            PowerField::Name => Value::from(power.name.as_str()),
            PowerField::Description => Value::from(power.description.as_str()),
            PowerField::HeroPowers => continue,
        };
        out.insert(field.name().to_string(), value);
    }
    out
}

fn hero_power_columns(
    hero_power: &HeroPower,
    fields: &FieldSet<HeroPowerField>,
) -> Map<String, Value> {
    let mut out = Map::new();
    for field in fields.iter() {
        let value = match field {
            HeroPowerField::Id => Value::from(hero_power.id),
            HeroPowerField::Strength => Value::from(hero_power.strength.as_str()),
            HeroPowerField::HeroId => Value::from(hero_power.hero_id),
            HeroPowerField::PowerId => Value::from(hero_power.power_id),
            HeroPowerField::Hero | HeroPowerField::Power => continue,
        };
        out.insert(field.name().to_string(), value);
    }
    out
}

fn nested_hero_powers<'a>(rows: impl Iterator<Item = &'a HeroPower>) -> Value {
    let fields = FieldSet::<HeroPowerField>::defaults();
    Value::Array(
        rows.map(|hp| Value::Object(hero_power_columns(hp, &fields)))
            .collect(),
    )
}

/// Serializes a hero.
///
/// `hero_powers`, when selected, lists the hero's join rows in their
/// default column set.
pub fn serialize_hero(tables: &Tables, hero: &Hero, fields: &FieldSet<HeroField>) -> Value {
    let mut out = hero_columns(hero, fields);
    if fields.contains(HeroField::HeroPowers) {
        out.insert(
            HeroField::HeroPowers.name().to_string(),
            nested_hero_powers(tables.hero_powers_by_hero(hero.id)),
        );
    }
    Value::Object(out)
}

/// Serializes a power.
///
/// `hero_powers`, when selected, lists the power's join rows in their
/// default column set.
pub fn serialize_power(tables: &Tables, power: &Power, fields: &FieldSet<PowerField>) -> Value {
    let mut out = power_columns(power, fields);
    if fields.contains(PowerField::HeroPowers) {
        out.insert(
            PowerField::HeroPowers.name().to_string(),
            nested_hero_powers(tables.hero_powers_by_power(power.id)),
        );
    }
    Value::Object(out)
}

/// Serializes a hero-power row.
///
/// `hero` and `power`, when selected, are the referenced parents in their
/// default column set. A parent missing from `tables` renders as `null`.
pub fn serialize_hero_power(
    tables: &Tables,
    hero_power: &HeroPower,
    fields: &FieldSet<HeroPowerField>,
) -> Value {
    let mut out = hero_power_columns(hero_power, fields);

    if fields.contains(HeroPowerField::Hero) {
        let hero = tables
            .hero(hero_power.hero_id)
            .map(|h| Value::Object(hero_columns(h, &FieldSet::defaults())))
            .unwrap_or(Value::Null);
        out.insert(HeroPowerField::Hero.name().to_string(), hero);
    }

    if fields.contains(HeroPowerField::Power) {
        let power = tables
            .power(hero_power.power_id)
            .map(|p| Value::Object(power_columns(p, &FieldSet::defaults())))
            .unwrap_or(Value::Null);
        out.insert(HeroPowerField::Power.name().to_string(), power);
    }

    Value::Object(out)
}
