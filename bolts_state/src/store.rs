// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory entry tables.
//!
//! [`StateStore`] keeps one table for the global scope and one table per owning
//! element. It knows nothing about the document; [`State`](crate::State) pairs
//! it with an [`ElementRepository`](crate::ElementRepository) and keeps the two
//! in step.
//!
//! # Implementation
//!
//! Each table is a `SmallVec` sorted by key and searched with binary search.
//! Elements typically carry one to three state keys, so the entries live inline
//! and lookups stay within one cache line or two.

use alloc::string::{String, ToString};
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::value::StateValue;

/// Inline capacity of an entry table.
const INLINE_CAPACITY: usize = 4;

/// Where a state entry lives.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope<E> {
    /// Attached to the document root element.
    Global,
    /// Attached to one specific element.
    Local(E),
}

impl<E> Scope<E> {
    /// Returns the owning element of a local scope.
    #[must_use]
    #[inline]
    pub fn owner(&self) -> Option<&E> {
        match self {
            Self::Global => None,
            Self::Local(owner) => Some(owner),
        }
    }

    /// Returns `true` for the global scope.
    #[must_use]
    #[inline]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}

/// Entries of one scope, sorted by key.
#[derive(Clone, Debug, Default)]
struct EntryTable {
    entries: SmallVec<[(String, StateValue); INLINE_CAPACITY]>,
}

impl EntryTable {
    #[inline]
    fn find(&self, key: &str) -> Result<usize, usize> {
        self.entries.binary_search_by(|(k, _)| k.as_str().cmp(key))
    }

    fn get(&self, key: &str) -> Option<&StateValue> {
        self.find(key).ok().map(|idx| &self.entries[idx].1)
    }

    fn insert(&mut self, key: &str, value: StateValue) -> Option<StateValue> {
        match self.find(key) {
            Ok(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (key.to_string(), value));
                None
            }
        }
    }

    fn remove(&mut self, key: &str) -> Option<StateValue> {
        self.find(key).ok().map(|idx| self.entries.remove(idx).1)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &StateValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Global and per-element state entries.
///
/// At most one entry exists per `(scope, key)`; inserting an existing key
/// replaces its value. Local tables are created on first insert and dropped
/// when their last entry is removed.
///
/// # Example
///
/// ```rust
/// use bolts_state::{Scope, StateStore, StateValue};
///
/// let mut store = StateStore::<u32>::new();
/// store.insert("menu", StateValue::from("open"), &Scope::Global);
/// store.insert("menu", StateValue::TRUE, &Scope::Local(7));
///
/// assert_eq!(store.get("menu", &Scope::Global), Some(&StateValue::from("open")));
/// assert_eq!(store.get("menu", &Scope::Local(7)), Some(&StateValue::TRUE));
/// assert_eq!(store.get("menu", &Scope::Local(8)), None);
/// ```
#[derive(Clone, Debug)]
pub struct StateStore<E> {
    global: EntryTable,
    local: HashMap<E, EntryTable>,
}

impl<E: Clone + Eq + Hash> Default for StateStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Eq + Hash> StateStore<E> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            global: EntryTable::default(),
            local: HashMap::new(),
        }
    }

    fn table(&self, scope: &Scope<E>) -> Option<&EntryTable> {
        match scope {
            Scope::Global => Some(&self.global),
            Scope::Local(owner) => self.local.get(owner),
        }
    }

    /// Returns the value stored under `key` in `scope`.
    #[must_use]
    pub fn get(&self, key: &str, scope: &Scope<E>) -> Option<&StateValue> {
        self.table(scope).and_then(|table| table.get(key))
    }

    /// Returns `true` if an entry exists for `key` in `scope`.
    #[must_use]
    pub fn contains(&self, key: &str, scope: &Scope<E>) -> bool {
        self.get(key, scope).is_some()
    }

    /// Iterates the entries of `scope` in key order.
    pub fn entries<'a>(
        &'a self,
        scope: &Scope<E>,
    ) -> impl Iterator<Item = (&'a str, &'a StateValue)> + use<'a, E> {
        self.table(scope).into_iter().flat_map(|table| table.iter())
    }

    /// Copies the entries of `scope` into a map.
    ///
    /// A scope without entries yields an empty map.
    #[must_use]
    pub fn get_all(&self, scope: &Scope<E>) -> HashMap<String, StateValue> {
        self.entries(scope)
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: &str,
        value: StateValue,
        scope: &Scope<E>,
    ) -> Option<StateValue> {
        match scope {
            Scope::Global => self.global.insert(key, value),
            Scope::Local(owner) => self
                .local
                .entry(owner.clone())
                .or_default()
                .insert(key, value),
        }
    }

    /// Removes the entry for `key`, returning its value if there was one.
    pub fn remove(&mut self, key: &str, scope: &Scope<E>) -> Option<StateValue> {
        match scope {
            Scope::Global => self.global.remove(key),
            Scope::Local(owner) => {
                let table = self.local.get_mut(owner)?;
                let removed = table.remove(key);
                if table.is_empty() {
                    self.local.remove(owner);
                }
                removed
            }
        }
    }

    /// Drops every entry owned by `owner`, returning how many were dropped.
    pub fn forget_owner(&mut self, owner: &E) -> usize {
        self.local.remove(owner).map_or(0, |table| table.len())
    }

    /// Iterates the elements that own at least one entry.
    pub fn owners(&self) -> impl Iterator<Item = &E> + '_ {
        self.local.keys()
    }

    /// Total number of entries across all scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.global.len() + self.local.values().map(EntryTable::len).sum::<usize>()
    }

    /// Returns `true` if no scope holds any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.local.is_empty()
    }

    /// Removes every entry without touching any document.
    pub fn clear(&mut self) {
        self.global = EntryTable::default();
        self.local.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn insert_replaces_existing_key() {
        let mut store = StateStore::<u32>::new();
        assert_eq!(store.insert("a", StateValue::from(1), &Scope::Global), None);
        assert_eq!(
            store.insert("a", StateValue::from(2), &Scope::Global),
            Some(StateValue::from(1))
        );
        assert_eq!(store.get("a", &Scope::Global), Some(&StateValue::from(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn entries_are_sorted_by_key() {
        let mut store = StateStore::<u32>::new();
        for key in ["zeta", "alpha", "mid"] {
            store.insert(key, StateValue::TRUE, &Scope::Global);
        }
        let keys: Vec<_> = store.entries(&Scope::Global).map(|(k, _)| k).collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn local_scopes_are_independent() {
        let mut store = StateStore::<u32>::new();
        store.insert("k", StateValue::from("a"), &Scope::Local(1));
        store.insert("k", StateValue::from("b"), &Scope::Local(2));
        assert_eq!(store.get("k", &Scope::Local(1)), Some(&StateValue::from("a")));
        assert_eq!(store.get("k", &Scope::Local(2)), Some(&StateValue::from("b")));
        assert_eq!(store.get("k", &Scope::Global), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn emptied_local_table_is_dropped() {
        let mut store = StateStore::<u32>::new();
        store.insert("k", StateValue::TRUE, &Scope::Local(1));
        assert_eq!(store.owners().count(), 1);
        assert_eq!(store.remove("k", &Scope::Local(1)), Some(StateValue::TRUE));
        assert_eq!(store.owners().count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn removing_absent_key_returns_none() {
        let mut store = StateStore::<u32>::new();
        assert_eq!(store.remove("k", &Scope::Global), None);
        assert_eq!(store.remove("k", &Scope::Local(3)), None);
    }

    #[test]
    fn get_all_of_unknown_owner_is_empty_map() {
        let store = StateStore::<u32>::new();
        assert!(store.get_all(&Scope::Local(9)).is_empty());
    }

    #[test]
    fn forget_owner_reports_dropped_count() {
        let mut store = StateStore::<u32>::new();
        store.insert("a", StateValue::TRUE, &Scope::Local(1));
        store.insert("b", StateValue::TRUE, &Scope::Local(1));
        store.insert("a", StateValue::TRUE, &Scope::Global);
        assert_eq!(store.forget_owner(&1), 2);
        assert_eq!(store.forget_owner(&1), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn binary_search_correctness() {
        let mut store = StateStore::<u32>::new();
        let keys = ["e", "b", "d", "a", "c", "f"];
        for (i, key) in keys.iter().enumerate() {
            store.insert(key, StateValue::from(u32::try_from(i).unwrap()), &Scope::Global);
        }
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(
                store.get(key, &Scope::Global),
                Some(&StateValue::from(u32::try_from(i).unwrap())),
                "lookup of {key}"
            );
        }
        assert_eq!(store.get("g", &Scope::Global), None);
    }
}
