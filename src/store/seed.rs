//! Sample data set

use tracing::info;

use crate::model::{NewHero, NewHeroPower, NewPower, Strength};

use super::errors::StoreResult;
use super::store::{EntityStore, StoreCounts};

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

/// Result of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Store already held data and was left alone
    Skipped,
    /// Sample rows were inserted
    Seeded(StoreCounts),
}

/// Inserts the sample heroes, powers and associations into an empty store.
///
/// Every hero gets one power; strengths cycle through all three values so
/// each appears in the data set.
pub fn seed_sample_data(store: &EntityStore) -> StoreResult<SeedOutcome> {
    if !store.is_empty()? {
        info!("store not empty, skipping seed");
        return Ok(SeedOutcome::Skipped);
    }

    let mut heroes = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        heroes.push(store.create_hero(NewHero::new(*name, *super_name))?);
    }

    let mut powers = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        powers.push(store.create_power(NewPower::new(*name, *description))?);
    }

    for (i, hero) in heroes.iter().enumerate() {
        let power = &powers[i % powers.len()];
        let strength = Strength::ALL[i % Strength::ALL.len()];
        store.create_hero_power(NewHeroPower::new(strength, hero.id, power.id))?;
    }

    let counts = store.counts()?;
    info!(
        heroes = counts.heroes,
        powers = counts.powers,
        hero_powers = counts.hero_powers,
        "seeded sample data"
    );
    Ok(SeedOutcome::Seeded(counts))
}
