// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounce: fire once after activity stops.
//!
//! ## Usage
//!
//! 1) Call [`Debounce::trigger`] on every event of the burst.
//! 2) Call [`Debounce::poll`] from a timer or frame callback; it returns `true`
//!    exactly once, when `delay` ms have passed since the last trigger.
//!
//! Hosts with real timers can instead schedule a timeout for
//! [`Debounce::deadline`] after each trigger and poll when it fires.

use crate::Millis;

/// Trailing-edge debounce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay: Millis,
    deadline: Option<Millis>,
}

impl Debounce {
    /// Creates an idle debounce with the given quiet period.
    #[must_use]
    pub const fn new(delay: Millis) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The quiet period in milliseconds.
    #[must_use]
    #[inline]
    pub const fn delay(&self) -> Millis {
        self.delay
    }

    /// Records activity at `now`, pushing the deadline back.
    ///
    /// Returns `true` if this trigger started a new burst.
    pub fn trigger(&mut self, now: Millis) -> bool {
        let started = self.deadline.is_none();
        self.deadline = Some(now.saturating_add(self.delay));
        started
    }

    /// Returns `true` once the deadline has passed, and goes idle.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops a pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a burst is waiting to settle.
    #[must_use]
    #[inline]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The time at which the pending burst settles.
    #[must_use]
    #[inline]
    pub const fn deadline(&self) -> Option<Millis> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_debounce_never_fires() {
        let mut d = Debounce::new(10);
        assert!(!d.is_pending());
        assert!(!d.poll(1_000));
    }

    #[test]
    fn trigger_reports_burst_start() {
        let mut d = Debounce::new(10);
        assert!(d.trigger(0));
        assert!(!d.trigger(5));
        assert_eq!(d.deadline(), Some(15));
    }

    #[test]
    fn fires_at_deadline_exactly_once() {
        let mut d = Debounce::new(50);
        d.trigger(100);
        assert!(!d.poll(149));
        assert!(d.poll(150));
        assert!(!d.poll(151));
        assert!(!d.is_pending());
    }

    #[test]
    fn cancel_discards_the_burst() {
        let mut d = Debounce::new(50);
        d.trigger(0);
        d.cancel();
        assert!(!d.poll(100));
    }

    #[test]
    fn deadline_saturates() {
        let mut d = Debounce::new(10);
        d.trigger(Millis::MAX - 1);
        assert_eq!(d.deadline(), Some(Millis::MAX));
    }
}
