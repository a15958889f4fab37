// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bolts Timing: host-agnostic rate limiting for UI callbacks.
//!
//! Browsers deliver resize, scroll and pointer events in bursts. These small
//! state machines decide *when* a callback should run; the host owns the clock
//! and the callbacks. Every method takes the current time as a millisecond
//! timestamp (`performance.now()`, `Date.now()`, or a test counter), which
//! keeps them deterministic and testable without timers.
//!
//! - [`debounce`]: run once after a burst has been quiet for a delay.
//! - [`throttle`]: run at most once per window.
//! - [`interval`]: a drift-corrected interval driven by animation frames.
//!
//! ## Usage
//!
//! ```rust
//! use bolts_timing::debounce::Debounce;
//!
//! let mut settle = Debounce::new(50);
//!
//! // A burst of resize events.
//! for t in [0, 10, 20, 30] {
//!     settle.trigger(t);
//! }
//! assert!(!settle.poll(60));  // 30 + 50 not reached yet
//! assert!(settle.poll(80));   // quiet for 50 ms: fire once
//! assert!(!settle.poll(200)); // and only once
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod debounce;
pub mod interval;
pub mod throttle;

pub use debounce::Debounce;
pub use interval::Interval;
pub use throttle::Throttle;

/// A point in time, in milliseconds, on a host-chosen monotonic clock.
pub type Millis = u64;
