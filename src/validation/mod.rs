//! Field-level validation for heroesdb writes
//!
//! Every write path runs the applicable validators before touching the
//! store, so a rejected write never leaves partial state behind.
//!
//! # Rules
//!
//! - Power descriptions are present and at least 20 characters long
//! - Strength is exactly one of `Strong`, `Weak`, `Average`
//! - A hero-power row references an existing hero and an existing power
//! - Hero names and super names are non-empty

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::{
    validate_hero_names, validate_hero_power_references, validate_power_description,
    validate_strength, ReferenceLookup, MIN_DESCRIPTION_LEN,
};
