// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bolts Detect: device capability detectors that report through state.
//!
//! Each detector probes one characteristic of the device or page and records
//! the result as a state entry, so stylesheets can adapt without script:
//!
//! - [`hover`]: `detect-hover` on the root when the primary input can hover.
//! - [`resize`]: `resizing` on the root while the viewport is being resized.
//! - [`orientation`]: `orientation` (`landscape`/`portrait`/`square`) on every
//!   image.
//!
//! Detectors never touch attributes themselves; they call
//! [`State::set`](bolts_state::State::set) and
//! [`State::remove`](bolts_state::State::remove). They also never touch the
//! environment: the host answers questions through [`DetectionHost`] and
//! forwards events (first `mouseover`, `resize`, image `load`) to the detector
//! methods. This keeps every detector testable over a
//! [`MemoryDocument`](bolts_state::MemoryDocument).
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with the standard library.
//! - `libm`: build Kurbo for `no_std` targets.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

pub mod hover;
pub mod orientation;
pub mod resize;

pub use hover::{HoverDetector, HoverOutcome, InputSignals};
pub use orientation::{ImageInfo, ImageScan, Orientation};
pub use resize::ResizeDetector;

/// Environment queries the detectors need from the host.
pub trait DetectionHost<E> {
    /// Input capabilities of the current device.
    fn input_signals(&self) -> InputSignals;

    /// Every image in the document, in tree order.
    fn images(&self) -> Vec<ImageInfo<E>>;
}
