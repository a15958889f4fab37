// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation-frame interval: a `setInterval` replacement paced by frames.
//!
//! ## Usage
//!
//! 1) Call [`Interval::start`] with the current time. If it returns `true`,
//!    run the callback immediately (`start_with_callback`).
//! 2) On every animation frame, call [`Interval::on_frame`]; run the callback
//!    when it returns `true`.
//! 3) Call [`Interval::stop`] to pause; the host cancels its frame request.
//!
//! When a tick is late, the reference time is moved back by the overshoot
//! (`now - elapsed % period`) so ticks stay on the original grid.
//!
//! ## Minimal example
//!
//! ```
//! use bolts_timing::Interval;
//!
//! let mut tick = Interval::new(25);
//! assert!(!tick.start(0));
//! assert!(!tick.on_frame(16));
//! assert!(tick.on_frame(33)); // 33 ms elapsed > 25 ms
//! assert!(!tick.on_frame(49));
//! assert!(tick.on_frame(66));
//! ```

use crate::Millis;

/// Period used by [`Interval::default`].
pub const DEFAULT_PERIOD: Millis = 25;

/// Frame-driven, drift-corrected interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Millis,
    start_with_callback: bool,
    running: bool,
    /// Reference time of the last tick. `None` forces the next frame to tick.
    then: Option<Millis>,
}

impl Default for Interval {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

impl Interval {
    /// Creates a stopped interval with the given period.
    #[must_use]
    pub const fn new(period: Millis) -> Self {
        Self {
            period,
            start_with_callback: false,
            running: false,
            then: None,
        }
    }

    /// Makes [`Interval::start`] tick immediately instead of after one period.
    #[must_use]
    pub const fn start_with_callback(mut self, yes: bool) -> Self {
        self.start_with_callback = yes;
        self
    }

    /// The period in milliseconds.
    #[must_use]
    #[inline]
    pub const fn period(&self) -> Millis {
        self.period
    }

    /// Returns `true` between [`Interval::start`] and [`Interval::stop`].
    #[must_use]
    #[inline]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Starts the interval at `now`. Starting a running interval does nothing.
    ///
    /// Returns `true` if the callback should run right away.
    pub fn start(&mut self, now: Millis) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.then = if self.start_with_callback {
            None
        } else {
            Some(now)
        };
        self.on_frame(now)
    }

    /// Stops the interval. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.then = None;
        true
    }

    /// Advances to the frame at `now`; returns `true` if the callback is due.
    pub fn on_frame(&mut self, now: Millis) -> bool {
        if !self.running {
            return false;
        }
        let Some(then) = self.then else {
            self.then = Some(now);
            return true;
        };
        let elapsed = now.saturating_sub(then);
        if elapsed > self.period {
            let overshoot = if self.period == 0 {
                0
            } else {
                elapsed % self.period
            };
            self.then = Some(now - overshoot);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_interval_ignores_frames() {
        let mut i = Interval::new(10);
        assert!(!i.on_frame(100));
        assert!(!i.stop());
    }

    #[test]
    fn start_with_callback_ticks_immediately() {
        let mut i = Interval::new(10).start_with_callback(true);
        assert!(i.start(5));
        assert!(!i.on_frame(10));
        assert!(i.on_frame(16));
    }

    #[test]
    fn second_start_is_a_no_op() {
        let mut i = Interval::new(10);
        assert!(!i.start(0));
        assert!(!i.start(100));
        assert!(i.on_frame(11));
    }

    #[test]
    fn late_ticks_stay_on_the_grid() {
        let mut i = Interval::new(25);
        i.start(0);
        // Frame arrives 40 ms late: tick, and rebase to 60 - (60 % 25) = 50.
        assert!(i.on_frame(60));
        assert!(!i.on_frame(75));
        assert!(i.on_frame(76));
    }

    #[test]
    fn stop_then_start_restarts_reference() {
        let mut i = Interval::new(10);
        i.start(0);
        assert!(i.stop());
        assert!(!i.is_running());
        assert!(!i.start(1_000));
        assert!(!i.on_frame(1_005));
        assert!(i.on_frame(1_011));
    }

    #[test]
    fn zero_period_ticks_every_advancing_frame() {
        let mut i = Interval::new(0);
        i.start(0);
        assert!(!i.on_frame(0));
        assert!(i.on_frame(1));
        assert!(i.on_frame(2));
    }
}
