// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover capability: does the primary input device hover?
//!
//! Three heuristics each carry a confidence ("probability", 0–100). A heuristic
//! only runs when its probability reaches the detector's threshold and hover
//! has not been detected yet:
//!
//! | Heuristic    | Probability | Signal                                              |
//! |--------------|-------------|-----------------------------------------------------|
//! | mouse events | 90          | `mousemove` supported and `touchstart` unsupported  |
//! | media query  | 100         | `(hover: hover)` matches                            |
//! | mouseover    | 100         | a real `mouseover` arrives (not on mobile agents)   |
//!
//! The first two are answered from [`InputSignals`] at detection time. The
//! third needs an event listener, so [`HoverDetector::detect`] reports
//! [`HoverOutcome::AwaitMouseover`] and the host forwards the first
//! `mouseover` to [`HoverDetector::on_mouseover`].
//!
//! ```rust
//! use bolts_detect::hover::{HoverDetector, HoverOutcome, InputSignals};
//! use bolts_state::{MemoryDocument, Scope, State};
//!
//! let mut state = State::new(MemoryDocument::new());
//! let detector = HoverDetector::default();
//!
//! let outcome = detector.detect(&mut state, InputSignals::HOVER_MEDIA).unwrap();
//! assert_eq!(outcome, HoverOutcome::Detected);
//! assert!(state.get("detect-hover", &Scope::Global).is_some());
//! ```

use bitflags::bitflags;
use bolts_state::{ElementRepository, Scope, State, StateError};

/// Global flag set when hover capability is detected.
pub const HOVER_KEY: &str = "detect-hover";

/// Confidence of the mouse-event heuristic.
pub const MOUSE_EVENTS_PROBABILITY: u8 = 90;
/// Confidence of the `(hover: hover)` media query heuristic.
pub const HOVER_MEDIA_PROBABILITY: u8 = 100;
/// Confidence of the first-mouseover heuristic.
pub const MOUSEOVER_PROBABILITY: u8 = 100;

bitflags! {
    /// Input capabilities reported by the host environment.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InputSignals: u8 {
        /// The window exposes `onmousemove`.
        const MOUSEMOVE = 1 << 0;
        /// The window exposes `ontouchstart`.
        const TOUCHSTART = 1 << 1;
        /// The `(hover: hover)` media query matches.
        const HOVER_MEDIA = 1 << 2;
        /// The user agent identifies as a mobile device.
        const MOBILE_AGENT = 1 << 3;
    }
}

/// Result of running the synchronous hover heuristics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverOutcome {
    /// Hover capability is established.
    Detected,
    /// Not established yet; forward the first `mouseover` event.
    AwaitMouseover,
    /// Not established and nothing further to wait for.
    Undetermined,
}

/// Detects hover capability and reports it as [`HOVER_KEY`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverDetector {
    threshold: u8,
}

impl Default for HoverDetector {
    fn default() -> Self {
        Self::new(100)
    }
}

impl HoverDetector {
    /// Creates a detector that trusts heuristics with at least `threshold`
    /// confidence.
    #[must_use]
    pub const fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// The minimum confidence a heuristic needs.
    #[must_use]
    #[inline]
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Returns `true` if the hover flag is already set.
    #[must_use]
    pub fn is_detected<D: ElementRepository>(state: &State<D>) -> bool {
        state
            .get(HOVER_KEY, &Scope::Global)
            .is_some_and(|value| value.is_truthy())
    }

    fn should_run<D: ElementRepository>(&self, probability: u8, state: &State<D>) -> bool {
        probability >= self.threshold && !Self::is_detected(state)
    }

    /// Runs the signal-based heuristics and reports what the host should do
    /// next.
    pub fn detect<D: ElementRepository>(
        &self,
        state: &mut State<D>,
        signals: InputSignals,
    ) -> Result<HoverOutcome, StateError> {
        if self.should_run(MOUSE_EVENTS_PROBABILITY, state)
            && signals.contains(InputSignals::MOUSEMOVE)
            && !signals.contains(InputSignals::TOUCHSTART)
        {
            state.set_flag(HOVER_KEY, &Scope::Global)?;
        }

        if self.should_run(HOVER_MEDIA_PROBABILITY, state)
            && signals.contains(InputSignals::HOVER_MEDIA)
        {
            state.set_flag(HOVER_KEY, &Scope::Global)?;
        }

        if Self::is_detected(state) {
            return Ok(HoverOutcome::Detected);
        }
        if signals.contains(InputSignals::MOBILE_AGENT)
            || !self.should_run(MOUSEOVER_PROBABILITY, state)
        {
            return Ok(HoverOutcome::Undetermined);
        }
        Ok(HoverOutcome::AwaitMouseover)
    }

    /// Handles the first `mouseover` event. Returns `true` if the flag was set
    /// by this call.
    pub fn on_mouseover<D: ElementRepository>(
        &self,
        state: &mut State<D>,
    ) -> Result<bool, StateError> {
        if !self.should_run(MOUSEOVER_PROBABILITY, state) {
            return Ok(false);
        }
        state.set_flag(HOVER_KEY, &Scope::Global)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolts_state::{MemoryDocument, StateValue};

    fn state() -> State<MemoryDocument> {
        State::new(MemoryDocument::new())
    }

    #[test]
    fn mouse_events_need_a_lenient_threshold() {
        let signals = InputSignals::MOUSEMOVE;

        let mut strict = state();
        let outcome = HoverDetector::new(100).detect(&mut strict, signals).unwrap();
        assert_eq!(outcome, HoverOutcome::AwaitMouseover);

        let mut lenient = state();
        let outcome = HoverDetector::new(90).detect(&mut lenient, signals).unwrap();
        assert_eq!(outcome, HoverOutcome::Detected);
    }

    #[test]
    fn touch_support_defeats_the_mouse_heuristic() {
        let mut s = state();
        let signals = InputSignals::MOUSEMOVE | InputSignals::TOUCHSTART;
        let outcome = HoverDetector::new(0).detect(&mut s, signals).unwrap();
        assert_eq!(outcome, HoverOutcome::AwaitMouseover);
        assert!(!HoverDetector::is_detected(&s));
    }

    #[test]
    fn mobile_agents_never_wait_for_mouseover() {
        let mut s = state();
        let outcome = HoverDetector::default()
            .detect(&mut s, InputSignals::MOBILE_AGENT | InputSignals::TOUCHSTART)
            .unwrap();
        assert_eq!(outcome, HoverOutcome::Undetermined);
    }

    #[test]
    fn threshold_above_every_heuristic_is_undetermined() {
        let mut s = state();
        let outcome = HoverDetector::new(101)
            .detect(&mut s, InputSignals::all())
            .unwrap();
        assert_eq!(outcome, HoverOutcome::Undetermined);
        assert!(!HoverDetector::is_detected(&s));
    }

    #[test]
    fn first_mouseover_sets_flag_once() {
        let mut s = state();
        let detector = HoverDetector::default();
        assert!(detector.on_mouseover(&mut s).unwrap());
        assert!(!detector.on_mouseover(&mut s).unwrap());
        assert_eq!(s.get(HOVER_KEY, &Scope::Global), Some(&StateValue::TRUE));
    }

    #[test]
    fn imported_flag_short_circuits_detection() {
        let mut doc = MemoryDocument::new();
        let root = doc.root_id();
        doc.set_attribute(&root, "data-bolts-state-detect-hover", "")
            .unwrap();
        let mut s = State::new(doc);
        s.import_from_dom();

        let outcome = HoverDetector::default()
            .detect(&mut s, InputSignals::empty())
            .unwrap();
        assert_eq!(outcome, HoverOutcome::Detected);
    }
}
