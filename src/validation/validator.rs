//! Validators applied to candidate field sets
//!
//! Validators are pure: they never mutate their input or the store, and
//! the same input always produces the same outcome.

use crate::model::{EntityId, Strength};

use super::errors::{ValidationError, ValidationResult};

/// Minimum number of characters in a power description
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Read-only view used to resolve foreign keys during validation.
pub trait ReferenceLookup {
    fn hero_exists(&self, id: EntityId) -> bool;
    fn power_exists(&self, id: EntityId) -> bool;
}

/// Validates a power description.
///
/// Fails when the value is absent, empty, or shorter than
/// [`MIN_DESCRIPTION_LEN`] characters. Exactly 20 characters passes.
/// Length is counted in characters, not bytes.
pub fn validate_power_description(value: Option<&str>) -> ValidationResult<()> {
    match value {
        Some(description) if description.chars().count() >= MIN_DESCRIPTION_LEN => Ok(()),
        _ => Err(ValidationError::DescriptionTooShort),
    }
}

/// Validates and parses a strength value.
pub fn validate_strength(value: &str) -> ValidationResult<Strength> {
    value.parse()
}

/// Checks that both ends of a hero-power row exist.
pub fn validate_hero_power_references<L: ReferenceLookup + ?Sized>(
    hero_id: EntityId,
    power_id: EntityId,
    lookup: &L,
) -> ValidationResult<()> {
    if lookup.hero_exists(hero_id) && lookup.power_exists(power_id) {
        Ok(())
    } else {
        Err(ValidationError::ReferenceNotFound)
    }
}

/// Validates the non-empty name fields of a hero.
pub fn validate_hero_names(name: &str, super_name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::FieldRequired("Name"));
    }
    if super_name.is_empty() {
        return Err(ValidationError::FieldRequired("Super name"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct FixedLookup {
        heroes: HashSet<EntityId>,
        powers: HashSet<EntityId>,
    }

    impl ReferenceLookup for FixedLookup {
        fn hero_exists(&self, id: EntityId) -> bool {
            self.heroes.contains(&id)
        }

        fn power_exists(&self, id: EntityId) -> bool {
            self.powers.contains(&id)
        }
    }

    fn lookup() -> FixedLookup {
        FixedLookup {
            heroes: [1, 2].into_iter().collect(),
            powers: [1].into_iter().collect(),
        }
    }

    #[test]
    fn test_description_boundary() {
        let nineteen = "a".repeat(19);
        let twenty = "a".repeat(20);
        assert_eq!(
            validate_power_description(Some(&nineteen)),
            Err(ValidationError::DescriptionTooShort)
        );
        assert!(validate_power_description(Some(&twenty)).is_ok());
    }

    #[test]
    fn test_description_absent_or_empty() {
        assert!(validate_power_description(None).is_err());
        assert!(validate_power_description(Some("")).is_err());
    }

    #[test]
    fn test_description_counts_characters() {
        // 20 characters, 40 bytes
        let wide = "é".repeat(20);
        assert!(validate_power_description(Some(&wide)).is_ok());
        let short_wide = "é".repeat(15);
        assert!(validate_power_description(Some(&short_wide)).is_err());
    }

    #[test]
    fn test_strength() {
        assert_eq!(validate_strength("Weak"), Ok(Strength::Weak));
        assert_eq!(
            validate_strength("Mighty"),
            Err(ValidationError::InvalidStrength)
        );
    }

    #[test]
    fn test_references() {
        let lookup = lookup();
        assert!(validate_hero_power_references(1, 1, &lookup).is_ok());
        assert_eq!(
            validate_hero_power_references(3, 1, &lookup),
            Err(ValidationError::ReferenceNotFound)
        );
        assert_eq!(
            validate_hero_power_references(1, 2, &lookup),
            Err(ValidationError::ReferenceNotFound)
        );
    }

    #[test]
    fn test_hero_names() {
        assert!(validate_hero_names("Kamala Khan", "Ms. Marvel").is_ok());
        assert_eq!(
            validate_hero_names("", "Ms. Marvel"),
            Err(ValidationError::FieldRequired("Name"))
        );
        assert_eq!(
            validate_hero_names("Kamala Khan", ""),
            Err(ValidationError::FieldRequired("Super name"))
        );
    }
}
