//! A single id-keyed table

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::EntityId;

/// Rows keyed by store-assigned id.
///
/// Ids start at 1 and only grow; a removed id is never handed out again.
/// Iteration is in id order, which is also insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table<T> {
    next_id: EntityId,
    rows: BTreeMap<EntityId, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Id the next insert will receive
    pub fn next_id(&self) -> EntityId {
        self.next_id
    }

    /// Assigns the next id and stores the row built from it.
    pub fn insert_with<F>(&mut self, build: F) -> &T
    where
        F: FnOnce(EntityId) -> T,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert_with(|| build(id))
    }

    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        self.rows.remove(&id)
    }

    /// Removes every row rejected by `keep`, returning how many went.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|_, row| keep(row));
        before - self.rows.len()
    }

    /// Highest id currently stored
    pub fn max_id(&self) -> Option<EntityId> {
        self.rows.keys().next_back().copied()
    }
}
