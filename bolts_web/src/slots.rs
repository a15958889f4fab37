// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numbered storage for values that Rust cannot hash.

use std::collections::BTreeMap;

/// Values addressed by `u32` ids handed out in insertion order.
///
/// Ids are never reused, so a stale id stops resolving once its slot is
/// released instead of aliasing a later value.
#[derive(Clone, Debug)]
pub(crate) struct SlotTable<T> {
    next: u32,
    slots: BTreeMap<u32, T>,
}

impl<T> Default for SlotTable<T> {
    fn default() -> Self {
        Self {
            next: 0,
            slots: BTreeMap::new(),
        }
    }
}

impl<T> SlotTable<T> {
    /// Stores `value` under a fresh id.
    pub(crate) fn insert(&mut self, value: T) -> u32 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        self.slots.insert(id, value);
        id
    }

    pub(crate) fn get(&self, id: u32) -> Option<&T> {
        self.slots.get(&id)
    }

    /// Releases every slot whose value fails `keep`, returning the released
    /// ids with their values in id order.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> Vec<(u32, T)> {
        let released: Vec<u32> = self
            .slots
            .iter()
            .filter(|(_, value)| !keep(value))
            .map(|(id, _)| *id)
            .collect();
        released
            .into_iter()
            .filter_map(|id| self.slots.remove(&id).map(|value| (id, value)))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}
