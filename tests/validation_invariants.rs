//! Validation Invariant Tests
//!
//! Validators are deterministic and side-effect free, and the strength
//! set is closed and case-sensitive.

use heroesdb::model::{NewHero, NewPower, Strength};
use heroesdb::store::EntityStore;
use heroesdb::validation::{
    validate_hero_power_references, validate_power_description, validate_strength,
    ValidationError, MIN_DESCRIPTION_LEN,
};

#[test]
fn test_validation_is_deterministic() {
    let inputs = ["", "short", "exactly twenty chars", "a much longer power description"];
    for input in inputs {
        let first = validate_power_description(Some(input));
        for _ in 0..5 {
            assert_eq!(validate_power_description(Some(input)), first);
        }
    }
    assert_eq!("exactly twenty chars".chars().count(), MIN_DESCRIPTION_LEN);
    assert!(validate_power_description(Some("exactly twenty chars")).is_ok());
}

#[test]
fn test_strength_set_is_closed_and_case_sensitive() {
    for strength in Strength::ALL {
        assert_eq!(validate_strength(strength.as_str()), Ok(strength));
    }
    for bad in ["strong", "WEAK", "average ", "", "Mighty"] {
        assert_eq!(validate_strength(bad), Err(ValidationError::InvalidStrength));
    }
}

#[test]
fn test_reference_check_reads_live_tables() {
    let store = EntityStore::in_memory();
    store.create_hero(NewHero::new("Elektra Natchios", "Elektra")).unwrap();
    store
        .create_power(NewPower::new("super human senses", "allows the wielder to use her senses"))
        .unwrap();

    let before = store.counts().unwrap();
    store
        .read(|tables| {
            assert!(validate_hero_power_references(1, 1, tables).is_ok());
            assert_eq!(
                validate_hero_power_references(1, 2, tables),
                Err(ValidationError::ReferenceNotFound)
            );
        })
        .unwrap();
    assert_eq!(store.counts().unwrap(), before);
}
