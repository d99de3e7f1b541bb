//! Shared backing store for all configuration views.
//!
//! A single flat `String → String` mapping underlies the whole client
//! configuration. Every view holds a handle to the same mapping; the store
//! itself is the cheap, clonable handle. Ordering is deterministic
//! (`BTreeMap`) so exports and tests are reproducible.
//!
//! The store is deliberately single-threaded: configuration is assembled on
//! one thread and then consumed read-only. The handle is `!Send`/`!Sync`,
//! so concurrent mutation is ruled out at compile time rather than guarded
//! with locks.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Handle to the shared key/value property store.
///
/// Cloning a `PropertyStore` produces another handle to the *same* mapping;
/// all configuration views constructed from one root share a single store.
/// Store operations never fail. Absence of a key is distinct from an empty
/// string value.
///
/// # Examples
///
/// ```
/// use client_config::PropertyStore;
///
/// let store = PropertyStore::new();
/// let handle = store.clone();
///
/// store.set("resolve.repoKey", "libs-release");
/// assert_eq!(handle.get("resolve.repoKey").as_deref(), Some("libs-release"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PropertyStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl PropertyStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, if present.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Stores `value` under `key`, overwriting any existing entry.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    /// Removes the entry under `key`. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    /// Returns `true` if an entry exists under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Copies every pair into the store. Last write wins on key collisions.
    pub fn extend<I, K, V>(&self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = self.entries.borrow_mut();
        for (key, value) in pairs {
            entries.insert(key.into(), value.into());
        }
    }

    /// Returns a copy of the full mapping at this point in time.
    ///
    /// Iteration order of the returned map is stable (sorted by key).
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }

    /// Returns the subset of entries whose *full key* satisfies `predicate`.
    ///
    /// The result is a fresh read-only map reflecting only keys present at
    /// call time; it does not track later mutations.
    pub fn filter(&self, predicate: impl Fn(&str) -> bool) -> BTreeMap<String, String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(key, _)| predicate(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns the number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
#[path = "property_store_tests.rs"]
mod tests;
