use serde::{Deserialize, Serialize};

use super::{EntityId, Strength};

/// A row in the `hero_powers` join table
///
/// Both foreign keys cascade: removing the referenced hero or power removes
/// the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPower {
    pub id: EntityId,
    pub strength: Strength,
    pub hero_id: EntityId,
    pub power_id: EntityId,
}

/// Candidate fields for inserting a join row
///
/// Strength is already parsed; references are checked by the store under
/// the same write lock that performs the insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHeroPower {
    pub strength: Strength,
    pub hero_id: EntityId,
    pub power_id: EntityId,
}

impl NewHeroPower {
    pub fn new(strength: Strength, hero_id: EntityId, power_id: EntityId) -> Self {
        Self {
            strength,
            hero_id,
            power_id,
        }
    }
}
