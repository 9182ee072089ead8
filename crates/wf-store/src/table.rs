//! Generic keyed collection

use std::collections::BTreeMap;
use wf_core::traits::{Entity, Id};

/// One entity table. Rows are kept ordered by id, which is also insertion
/// order since ids are monotonic.
#[derive(Debug, Clone)]
pub struct Table<T: Entity> {
    rows: BTreeMap<Id, T>,
}

impl<T: Entity> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Entity> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row under its own id, returning a copy of what was stored
    pub fn insert(&mut self, row: T) -> T {
        self.rows.insert(row.id(), row.clone());
        row
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.rows.contains_key(&id)
    }

    /// Mutate a row in place and return the merged result
    pub fn update<F>(&mut self, id: Id, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let row = self.rows.get_mut(&id)?;
        f(row);
        Some(row.clone())
    }

    /// Linear scan returning owned copies of matching rows
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.values().filter(|row| predicate(*row)).cloned().collect()
    }

    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.values().find(|row| predicate(*row))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
