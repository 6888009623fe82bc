//! Generic in-memory resource store
//!
//! One store per resource type, shared process-wide through `AppState`.
//! Lookup is id-keyed; listing returns a snapshot in insertion order.
//!
//! The store owns one lock per collection. `update_with` and `delete_if`
//! hold the write lock for the whole read-modify-write, so record
//! invariants survive concurrent request processing.

use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// Outcome of a guarded removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal<T> {
    /// The record was removed and is returned
    Removed(T),
    /// The guard refused; the record stays in place
    Refused,
    /// No record under that id
    Missing,
}

/// In-memory id-keyed collection for one resource type
#[derive(Clone)]
pub struct ResourceStore<T> {
    data: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Clone> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    pub fn add(&self, id: String, record: T) {
        self.data.write().unwrap().insert(id, record);
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.data.read().unwrap().get(id).cloned()
    }

    /// Snapshot of every record, in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.data.read().unwrap().values().cloned().collect()
    }

    /// Apply `apply` to the record under `id` and return the updated copy.
    ///
    /// The write lock is held across the whole modification.
    pub fn update_with(&self, id: &str, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut data = self.data.write().unwrap();
        let record = data.get_mut(id)?;
        apply(record);
        Some(record.clone())
    }

    /// Remove the record under `id` only if `permit` approves it.
    ///
    /// Check and removal happen under one write lock acquisition; a refusal
    /// leaves the record untouched.
    pub fn delete_if(&self, id: &str, permit: impl FnOnce(&T) -> bool) -> Removal<T> {
        let mut data = self.data.write().unwrap();
        let permitted = match data.get(id) {
            Some(record) => permit(record),
            None => return Removal::Missing,
        };
        if !permitted {
            return Removal::Refused;
        }
        match data.shift_remove(id) {
            Some(removed) => Removal::Removed(removed),
            None => Removal::Missing,
        }
    }

    pub fn len(&self) -> usize {
        self.data.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().unwrap().is_empty()
    }
}

impl<T: Clone> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
