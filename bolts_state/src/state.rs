// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The state facade: a [`StateStore`] kept in step with a document.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::codec;
use crate::dom::ElementRepository;
use crate::error::StateError;
use crate::reconcile;
use crate::store::{Scope, StateStore};
use crate::value::{IntoStateValue, StateValue};

/// Whether a write is mirrored into the document.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SyncMode {
    /// Write the attribute immediately (the normal case).
    #[default]
    Dom,
    /// Update the store only. Used when the value was just read from the
    /// document, so writing it back would be redundant.
    StoreOnly,
}

/// How [`State::toggle`] computes the next value.
#[derive(Clone, Debug, PartialEq)]
pub enum Toggle {
    /// Flip between `true` and unset.
    Flag,
    /// Flip between the given value and unset.
    Value(StateValue),
    /// Advance through the values in order, wrapping around. Duplicates are
    /// ignored after their first occurrence.
    Cycle(Vec<StateValue>),
}

impl Toggle {
    /// Builds a cycle toggle from dynamic inputs, validating each one.
    ///
    /// Fails with [`StateError::UnsupportedValue`] on the first invalid input
    /// and with [`StateError::EmptyCycle`] if no values are given.
    pub fn cycle<I>(values: I) -> Result<Self, StateError>
    where
        I: IntoIterator,
        I::Item: IntoStateValue,
    {
        let mut unique = Vec::new();
        for value in values {
            let value = value.into_state_value()?;
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        if unique.is_empty() {
            return Err(StateError::EmptyCycle);
        }
        Ok(Self::Cycle(unique))
    }

    /// Computes the value that follows `current`, or `None` if the entry
    /// should be removed.
    fn next(&self, current: Option<&StateValue>) -> Result<Option<StateValue>, StateError> {
        match self {
            Self::Flag => Ok(current.is_none().then_some(StateValue::TRUE)),
            Self::Value(value) => Ok(current.is_none().then(|| value.clone())),
            Self::Cycle(values) => {
                let mut unique: Vec<&StateValue> = Vec::with_capacity(values.len());
                for value in values {
                    if !unique.contains(&value) {
                        unique.push(value);
                    }
                }
                let first = *unique.first().ok_or(StateError::EmptyCycle)?;
                let next = current
                    .and_then(|current| unique.iter().position(|v| *v == current))
                    .map_or(first, |i| unique[(i + 1) % unique.len()]);
                Ok(Some(next.clone()))
            }
        }
    }
}

/// State entries mirrored into a document.
///
/// `State` owns both the in-memory [`StateStore`] and the document it mirrors
/// into. Every mutating call validates its inputs, writes the single affected
/// attribute and then updates the store, so when a call returns the two agree.
/// A call that fails leaves both untouched.
///
/// `State` is a plain value with no interior mutability. Hosts that share it
/// between callbacks wrap it in `Rc<RefCell<_>>` (single-threaded) or a mutex.
///
/// # Example
///
/// ```rust
/// use bolts_state::{MemoryDocument, Scope, State, StateValue, Toggle};
///
/// let mut state = State::new(MemoryDocument::new());
/// let root = state.document().root_id();
///
/// state.set_flag("detect-hover", &Scope::Global).unwrap();
/// assert_eq!(state.document().attribute(root, "data-bolts-state-detect-hover"), Some(""));
///
/// let theme = Toggle::cycle(["light", "dark"]).unwrap();
/// state.toggle("theme", &theme, &Scope::Global).unwrap();
/// assert_eq!(state.get("theme", &Scope::Global), Some(&StateValue::from("light")));
/// state.toggle("theme", &theme, &Scope::Global).unwrap();
/// assert_eq!(state.document().attribute(root, "data-bolts-state-theme"), Some("dark"));
/// ```
#[derive(Debug)]
pub struct State<D: ElementRepository> {
    store: StateStore<D::Element>,
    document: D,
}

impl<D: ElementRepository + Default> Default for State<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: ElementRepository> State<D> {
    /// Creates an empty state over `document`.
    ///
    /// Nothing is read from the document until [`State::import_from_dom`] runs.
    #[must_use]
    pub fn new(document: D) -> Self {
        Self {
            store: StateStore::new(),
            document,
        }
    }

    /// Borrows the document.
    #[must_use]
    #[inline]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutably borrows the document.
    ///
    /// Intended for building the document (adding elements, authoring markup).
    /// Writing state attributes through this handle bypasses the store; call
    /// [`State::import_from_dom`] or [`State::resync`] afterwards to reconcile.
    #[inline]
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Borrows the in-memory entries.
    #[must_use]
    #[inline]
    pub fn store(&self) -> &StateStore<D::Element> {
        &self.store
    }

    /// Consumes the state and returns the document.
    pub fn into_document(self) -> D {
        self.document
    }

    /// Returns the value stored under `key` in `scope`.
    #[must_use]
    pub fn get(&self, key: &str, scope: &Scope<D::Element>) -> Option<&StateValue> {
        self.store.get(key, scope)
    }

    /// Returns every entry of `scope`. A scope without entries yields an empty
    /// map rather than `None`.
    #[must_use]
    pub fn get_all(&self, scope: &Scope<D::Element>) -> HashMap<String, StateValue> {
        self.store.get_all(scope)
    }

    /// Stores `value` under `key` and mirrors it into the document.
    pub fn set(
        &mut self,
        key: &str,
        value: impl IntoStateValue,
        scope: &Scope<D::Element>,
    ) -> Result<(), StateError> {
        self.set_with(key, value, scope, SyncMode::Dom)
    }

    /// Stores `true` under `key`.
    pub fn set_flag(&mut self, key: &str, scope: &Scope<D::Element>) -> Result<(), StateError> {
        self.set(key, StateValue::TRUE, scope)
    }

    /// Stores `value` under `key`, mirroring it into the document only when
    /// `sync` is [`SyncMode::Dom`].
    pub fn set_with(
        &mut self,
        key: &str,
        value: impl IntoStateValue,
        scope: &Scope<D::Element>,
        sync: SyncMode,
    ) -> Result<(), StateError> {
        codec::validate_key(key)?;
        let value = value.into_state_value()?;
        let element = reconcile::scope_element(&self.document, scope)?;
        if sync == SyncMode::Dom {
            reconcile::write_attribute(&mut self.document, &element, key, &value)?;
        }
        self.store.insert(key, value, scope);
        Ok(())
    }

    /// Removes the entry for `key` and its attribute. Removing an absent key
    /// is not an error.
    pub fn remove(&mut self, key: &str, scope: &Scope<D::Element>) -> Result<(), StateError> {
        codec::validate_key(key)?;
        let element = reconcile::scope_element(&self.document, scope)?;
        reconcile::remove_attribute(&mut self.document, &element, key)?;
        self.store.remove(key, scope);
        Ok(())
    }

    /// Advances the entry for `key` according to `mode`.
    ///
    /// In [`Toggle::Flag`] and [`Toggle::Value`] mode an existing entry is
    /// removed and a missing one is set. In [`Toggle::Cycle`] mode the entry
    /// moves to the value after its current one, or to the first value when it
    /// is missing or holds a value outside the cycle.
    pub fn toggle(
        &mut self,
        key: &str,
        mode: &Toggle,
        scope: &Scope<D::Element>,
    ) -> Result<(), StateError> {
        codec::validate_key(key)?;
        match mode.next(self.store.get(key, scope))? {
            Some(value) => self.set(key, value, scope),
            None => self.remove(key, scope),
        }
    }

    /// Flips `key` between `value` and unset.
    pub fn toggle_value(
        &mut self,
        key: &str,
        value: impl IntoStateValue,
        scope: &Scope<D::Element>,
    ) -> Result<(), StateError> {
        let mode = Toggle::Value(value.into_state_value()?);
        self.toggle(key, &mode, scope)
    }

    /// Advances `key` through `values`. See [`Toggle::cycle`].
    pub fn toggle_cycle<I>(
        &mut self,
        key: &str,
        values: I,
        scope: &Scope<D::Element>,
    ) -> Result<(), StateError>
    where
        I: IntoIterator,
        I::Item: IntoStateValue,
    {
        let mode = Toggle::cycle(values)?;
        self.toggle(key, &mode, scope)
    }

    /// Reads every state attribute in the document into the store.
    ///
    /// Root attributes become global entries, attributes of any other element
    /// become entries local to it. Empty attributes read as `true`, all others
    /// as strings. The document is not written. Returns the number of entries
    /// imported.
    pub fn import_from_dom(&mut self) -> usize {
        reconcile::import_from_dom(&self.document, &mut self.store)
    }

    /// Rewrites all state attributes of the scope's element from the store,
    /// dropping prefixed attributes that have no entry.
    pub fn resync(&mut self, scope: &Scope<D::Element>) -> Result<(), StateError> {
        let element = reconcile::scope_element(&self.document, scope)?;
        reconcile::render_element(&mut self.document, &element, self.store.entries(scope))?;
        Ok(())
    }

    /// Drops the entries of an element that has left the document. The
    /// document is not touched. Returns the number of entries dropped.
    pub fn forget_owner(&mut self, owner: &D::Element) -> usize {
        self.store.forget_owner(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;

    #[test]
    fn toggle_cycle_dedupes_preserving_first_occurrence() {
        let mode = Toggle::cycle(["a", "b", "a", "c", "b"]).unwrap();
        assert_eq!(
            mode,
            Toggle::Cycle(alloc::vec![
                StateValue::from("a"),
                StateValue::from("b"),
                StateValue::from("c"),
            ])
        );
    }

    #[test]
    fn empty_cycle_is_rejected() {
        assert_eq!(
            Toggle::cycle(Vec::<StateValue>::new()),
            Err(StateError::EmptyCycle)
        );
        let mut state = State::new(MemoryDocument::new());
        assert_eq!(
            state.toggle("k", &Toggle::Cycle(Vec::new()), &Scope::Global),
            Err(StateError::EmptyCycle)
        );
        assert!(state.store().is_empty());
    }

    #[test]
    fn unknown_current_value_restarts_cycle() {
        let mut state = State::new(MemoryDocument::new());
        state.set("size", "huge", &Scope::Global).unwrap();
        state
            .toggle_cycle("size", ["s", "m", "l"], &Scope::Global)
            .unwrap();
        assert_eq!(state.get("size", &Scope::Global), Some(&StateValue::from("s")));
    }

    #[test]
    fn store_only_write_leaves_document_alone() {
        let mut state = State::new(MemoryDocument::new());
        let root = state.document().root_id();
        state
            .set_with("k", 1, &Scope::Global, SyncMode::StoreOnly)
            .unwrap();
        assert_eq!(state.get("k", &Scope::Global), Some(&StateValue::from(1)));
        assert!(state.document().attributes(root).is_empty());
    }

    #[test]
    fn invalid_key_fails_before_any_write() {
        let mut state = State::new(MemoryDocument::new());
        let root = state.document().root_id();
        assert!(matches!(
            state.set("bad key", true, &Scope::Global),
            Err(StateError::InvalidKey(_))
        ));
        assert!(state.store().is_empty());
        assert!(state.document().attributes(root).is_empty());
    }

    #[test]
    fn detached_owner_is_rejected_without_touching_other_scopes() {
        let mut doc = MemoryDocument::new();
        let gone = doc.create_element("div");
        let kept = doc.create_element("div");
        let mut state = State::new(doc);
        state.set("k", "v", &Scope::Local(kept)).unwrap();
        state.document_mut().detach(gone);

        assert_eq!(
            state.set("k", "x", &Scope::Local(gone)),
            Err(StateError::InvalidScope)
        );
        assert_eq!(state.get("k", &Scope::Local(kept)), Some(&StateValue::from("v")));
        assert_eq!(state.get("k", &Scope::Local(gone)), None);
    }

    #[test]
    fn resync_restores_drifted_attributes() {
        let mut state = State::new(MemoryDocument::new());
        let root = state.document().root_id();
        state.set("mode", "compact", &Scope::Global).unwrap();

        // Someone edited the attributes behind the store's back.
        let doc = state.document_mut();
        doc.remove_attribute(&root, "data-bolts-state-mode").unwrap();
        doc.set_attribute(&root, "data-bolts-state-ghost", "").unwrap();

        state.resync(&Scope::Global).unwrap();
        let doc = state.document();
        assert_eq!(doc.attribute(root, "data-bolts-state-mode"), Some("compact"));
        assert_eq!(doc.attribute(root, "data-bolts-state-ghost"), None);
    }

    #[test]
    fn forget_owner_keeps_document() {
        let mut doc = MemoryDocument::new();
        let img = doc.create_element("img");
        let mut state = State::new(doc);
        state.set("orientation", "square", &Scope::Local(img)).unwrap();
        assert_eq!(state.forget_owner(&img), 1);
        assert_eq!(state.get("orientation", &Scope::Local(img)), None);
        assert_eq!(
            state.document().attribute(img, "data-bolts-state-orientation"),
            Some("square")
        );
    }
}
