// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bolts: attribute-mirrored UI state and device capability detection.
//!
//! This crate ties the pieces together into one page runtime:
//!
//! - [`bolts_state`]: the state store and its attribute mirror.
//! - [`bolts_timing`]: debounce, throttle and frame-driven interval helpers.
//! - [`bolts_detect`]: hover, resize and image orientation detectors.
//!
//! [`Bolts`] owns the state and the detectors. A host (the browser glue in
//! `bolts_web`, or a test) creates it over a document, calls [`Bolts::boot`]
//! once the document is ready, then forwards `mouseover`, `resize` and image
//! `load` events.
//!
//! ## Usage
//!
//! ```rust
//! use bolts::{Bolts, BoltsConfig, DetectionHost, ImageInfo, InputSignals};
//! use bolts::{ElementId, ElementRepository, MemoryDocument, Scope, StateValue};
//!
//! struct Desktop;
//!
//! impl DetectionHost<ElementId> for Desktop {
//!     fn input_signals(&self) -> InputSignals {
//!         InputSignals::MOUSEMOVE | InputSignals::HOVER_MEDIA
//!     }
//!     fn images(&self) -> Vec<ImageInfo<ElementId>> {
//!         Vec::new()
//!     }
//! }
//!
//! let mut doc = MemoryDocument::new();
//! let root = doc.root_id();
//! doc.set_attribute(&root, "data-bolts-state-theme", "dark").unwrap();
//!
//! let mut bolts = Bolts::new(doc, BoltsConfig::default());
//! let report = bolts.boot(&Desktop);
//! assert_eq!(report.imported, 1);
//! assert!(report.is_clean());
//!
//! let state = bolts.state();
//! assert_eq!(state.get("theme", &Scope::Global), Some(&StateValue::from("dark")));
//! assert_eq!(state.get("detect-hover", &Scope::Global), Some(&StateValue::TRUE));
//! ```
//!
//! ## Logging
//!
//! Boot steps are logged with [`tracing`] at `debug`; detector failures at
//! `warn`. Install any subscriber to see them.
//!
//! ## Features
//!
//! - `serde`: derive `Deserialize`/`Serialize` for [`BoltsConfig`].

mod config;
mod runtime;

pub use config::BoltsConfig;
pub use runtime::{BootReport, Bolts, DetectorFailure, DetectorKind};

pub use bolts_detect::{
    self, DetectionHost, HoverDetector, HoverOutcome, ImageInfo, InputSignals, Orientation,
    ResizeDetector,
};
pub use bolts_state::{
    self, ATTRIBUTE_PREFIX, DomError, ElementId, ElementRepository, IntoStateValue,
    MemoryDocument, Scope, State, StateError, StateStore, StateValue, SyncMode, Toggle,
};
pub use bolts_timing::{self, Debounce, Interval, Millis, Throttle};
