// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize activity: a global `resizing` flag held while the viewport changes.
//!
//! Stylesheets use it to suspend transitions during a resize:
//!
//! ```css
//! html[data-bolts-state-resizing] * { transition: none !important; }
//! ```
//!
//! The host forwards every `resize` event to [`ResizeDetector::on_resize`] and
//! calls [`ResizeDetector::poll`] once [`ResizeDetector::deadline`] passes.

use bolts_state::{ElementRepository, Scope, State, StateError};
use bolts_timing::{Debounce, Millis};

/// Global flag held while a resize burst is in progress.
pub const RESIZING_KEY: &str = "resizing";

/// Quiet period after which a resize burst counts as finished.
pub const SETTLE_DELAY: Millis = 50;

/// Tracks resize bursts and mirrors them as [`RESIZING_KEY`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResizeDetector {
    settle: Debounce,
}

impl Default for ResizeDetector {
    fn default() -> Self {
        Self::new(SETTLE_DELAY)
    }
}

impl ResizeDetector {
    /// Creates a detector that settles after `delay` quiet milliseconds.
    #[must_use]
    pub const fn new(delay: Millis) -> Self {
        Self {
            settle: Debounce::new(delay),
        }
    }

    /// Handles a `resize` event at `now`.
    ///
    /// Sets the flag when it is missing and pushes the settle deadline back.
    pub fn on_resize<D: ElementRepository>(
        &mut self,
        state: &mut State<D>,
        now: Millis,
    ) -> Result<(), StateError> {
        if state.get(RESIZING_KEY, &Scope::Global).is_none() {
            state.set_flag(RESIZING_KEY, &Scope::Global)?;
        }
        self.settle.trigger(now);
        Ok(())
    }

    /// Clears the flag once the burst has settled. Returns `true` if it did.
    pub fn poll<D: ElementRepository>(
        &mut self,
        state: &mut State<D>,
        now: Millis,
    ) -> Result<bool, StateError> {
        if !self.settle.poll(now) {
            return Ok(false);
        }
        state.remove(RESIZING_KEY, &Scope::Global)?;
        Ok(true)
    }

    /// When the current burst settles, if one is in progress.
    #[must_use]
    #[inline]
    pub fn deadline(&self) -> Option<Millis> {
        self.settle.deadline()
    }

    /// Returns `true` while a burst is in progress.
    #[must_use]
    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.settle.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolts_state::{MemoryDocument, StateValue};

    #[test]
    fn flag_lives_for_the_burst() {
        let mut state = State::new(MemoryDocument::new());
        let root = state.document().root_id();
        let mut resize = ResizeDetector::default();

        for t in [0, 16, 32, 48] {
            resize.on_resize(&mut state, t).unwrap();
        }
        assert_eq!(state.get(RESIZING_KEY, &Scope::Global), Some(&StateValue::TRUE));
        assert_eq!(
            state.document().attribute(root, "data-bolts-state-resizing"),
            Some("")
        );
        assert_eq!(resize.deadline(), Some(98));

        assert!(!resize.poll(&mut state, 97).unwrap());
        assert!(resize.poll(&mut state, 98).unwrap());
        assert_eq!(state.get(RESIZING_KEY, &Scope::Global), None);
        assert_eq!(
            state.document().attribute(root, "data-bolts-state-resizing"),
            None
        );
        assert!(!resize.is_resizing());
    }

    #[test]
    fn new_burst_sets_flag_again() {
        let mut state = State::new(MemoryDocument::new());
        let mut resize = ResizeDetector::new(10);
        resize.on_resize(&mut state, 0).unwrap();
        resize.poll(&mut state, 10).unwrap();
        resize.on_resize(&mut state, 500).unwrap();
        assert!(state.get(RESIZING_KEY, &Scope::Global).is_some());
    }
}
