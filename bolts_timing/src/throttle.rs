// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throttle: let the first call of each window through.

use crate::Millis;

/// Leading-edge throttle.
///
/// ```rust
/// use bolts_timing::Throttle;
///
/// let mut scroll = Throttle::new(100);
/// assert!(scroll.try_acquire(0));
/// assert!(!scroll.try_acquire(40));
/// assert!(scroll.try_acquire(100));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Throttle {
    limit: Millis,
    blocked_until: Option<Millis>,
}

impl Throttle {
    /// Creates an open throttle with the given window length.
    #[must_use]
    pub const fn new(limit: Millis) -> Self {
        Self {
            limit,
            blocked_until: None,
        }
    }

    /// The window length in milliseconds.
    #[must_use]
    #[inline]
    pub const fn limit(&self) -> Millis {
        self.limit
    }

    /// Returns `true` if a call at `now` may run, and closes the window.
    pub fn try_acquire(&mut self, now: Millis) -> bool {
        if let Some(until) = self.blocked_until
            && now < until
        {
            return false;
        }
        self.blocked_until = Some(now.saturating_add(self.limit));
        true
    }

    /// Returns `true` if a call at `now` would be rejected.
    #[must_use]
    pub fn is_blocked(&self, now: Millis) -> bool {
        self.blocked_until.is_some_and(|until| now < until)
    }

    /// Reopens the window immediately.
    pub fn reset(&mut self) {
        self.blocked_until = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_inside_window_are_dropped() {
        let mut t = Throttle::new(50);
        let passed: usize = (0..100).filter(|&now| t.try_acquire(now)).count();
        assert_eq!(passed, 2, "expected calls at 0 and 50 only");
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let mut t = Throttle::new(10);
        assert!(t.try_acquire(0));
        assert!(!t.try_acquire(9));
        assert!(t.try_acquire(10));
    }

    #[test]
    fn reset_reopens() {
        let mut t = Throttle::new(1_000);
        t.try_acquire(0);
        assert!(t.is_blocked(1));
        t.reset();
        assert!(!t.is_blocked(1));
        assert!(t.try_acquire(1));
    }
}
