use serde::{Deserialize, Serialize};

use super::EntityId;

/// A row in the `powers` table
///
/// `description` is at least 20 characters long on every committed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

/// Candidate fields for inserting a power
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPower {
    pub name: String,
    pub description: String,
}

impl NewPower {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Partial update of a power
///
/// Only `description` is mutable. A `None` field leaves the stored value
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PowerUpdate {
    pub description: Option<String>,
}

impl PowerUpdate {
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }
}
