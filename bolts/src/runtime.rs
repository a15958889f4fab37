// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page runtime: state, detectors and the boot sequence.

use core::fmt;

use bolts_detect::orientation::{self, Orientation};
use bolts_detect::{DetectionHost, HoverDetector, HoverOutcome, ResizeDetector};
use bolts_state::{ElementRepository, State, StateError};
use bolts_timing::Millis;
use kurbo::Size;

use crate::config::BoltsConfig;

/// A boot step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DetectorKind {
    /// Hover capability (`detect-hover`).
    Hover,
    /// Image orientation (`orientation`).
    ImageOrientation,
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hover => "hover",
            Self::ImageOrientation => "image-orientation",
        })
    }
}

/// A detector that failed during boot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectorFailure {
    /// Which detector failed.
    pub detector: DetectorKind,
    /// Why it failed.
    pub error: StateError,
}

/// What boot found and what the host still has to wire up.
#[derive(Clone, Debug, PartialEq)]
pub struct BootReport<E> {
    /// Entries imported from the document.
    pub imported: usize,
    /// Hover result, or `None` if the hover detector failed.
    pub hover: Option<HoverOutcome>,
    /// Images without dimensions yet; measure them on `load`.
    pub pending_images: Vec<E>,
    /// Detectors that failed. The others still ran.
    pub failures: Vec<DetectorFailure>,
}

impl<E> BootReport<E> {
    /// Returns `true` if the host should forward the first `mouseover`.
    #[must_use]
    pub fn awaits_mouseover(&self) -> bool {
        self.hover == Some(HoverOutcome::AwaitMouseover)
    }

    /// Returns `true` if every detector succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// State mirrored into a document, plus the detectors that feed it.
///
/// One `Bolts` exists per page. It is an ordinary value: the host creates it,
/// calls [`Bolts::boot`] once, then forwards events to the `on_*` methods.
#[derive(Debug)]
pub struct Bolts<D: ElementRepository> {
    state: State<D>,
    config: BoltsConfig,
    hover: HoverDetector,
    resize: ResizeDetector,
}

impl<D: ElementRepository> Bolts<D> {
    /// Creates a runtime over `document`. Nothing is read until boot.
    pub fn new(document: D, config: BoltsConfig) -> Self {
        Self {
            state: State::new(document),
            hover: HoverDetector::new(config.detect_hover_threshold),
            resize: ResizeDetector::new(config.resize_settle_ms),
            config,
        }
    }

    /// The configuration this runtime was built with.
    #[must_use]
    pub fn config(&self) -> &BoltsConfig {
        &self.config
    }

    /// Borrows the state.
    #[must_use]
    pub fn state(&self) -> &State<D> {
        &self.state
    }

    /// Mutably borrows the state, for application reads and writes.
    pub fn state_mut(&mut self) -> &mut State<D> {
        &mut self.state
    }

    /// Imports state from the document, then runs every detector.
    ///
    /// Detectors run after the import so they see state authored in markup
    /// (a server-rendered `detect-hover`, for example). A failing detector is
    /// logged and recorded in the report; the remaining detectors still run.
    pub fn boot(&mut self, host: &impl DetectionHost<D::Element>) -> BootReport<D::Element> {
        let imported = self.state.import_from_dom();
        tracing::debug!(imported, "imported state from document");

        let mut report = BootReport {
            imported,
            hover: None,
            pending_images: Vec::new(),
            failures: Vec::new(),
        };

        match self.hover.detect(&mut self.state, host.input_signals()) {
            Ok(outcome) => {
                tracing::debug!(?outcome, "hover detection finished");
                report.hover = Some(outcome);
            }
            Err(error) => report.record(DetectorKind::Hover, error),
        }

        if self.config.image_orientation {
            let scan = orientation::scan_images(&mut self.state, host.images());
            tracing::debug!(
                tagged = scan.tagged,
                pending = scan.pending.len(),
                "tagged image orientation"
            );
            report.pending_images = scan.pending;
            for (_, error) in scan.failed {
                report.record(DetectorKind::ImageOrientation, error);
            }
        }

        // Resize needs no boot work beyond listener wiring, which is the host's.
        tracing::debug!(settle_ms = self.config.resize_settle_ms, "resize detection armed");

        report
    }

    /// Forwards the first `mouseover` event. Returns `true` if it established
    /// hover capability.
    pub fn on_mouseover(&mut self) -> Result<bool, StateError> {
        self.hover.on_mouseover(&mut self.state)
    }

    /// Forwards a `resize` event. Returns the time at which the host should
    /// call [`Bolts::poll_resize`].
    pub fn on_resize(&mut self, now: Millis) -> Result<Option<Millis>, StateError> {
        self.resize.on_resize(&mut self.state, now)?;
        Ok(self.resize.deadline())
    }

    /// Clears `resizing` once the burst has settled. Returns `true` if it did.
    pub fn poll_resize(&mut self, now: Millis) -> Result<bool, StateError> {
        self.resize.poll(&mut self.state, now)
    }

    /// Forwards an image `load` event with the image's measured size.
    pub fn on_image_load(
        &mut self,
        image: &D::Element,
        size: Size,
    ) -> Result<Orientation, StateError> {
        orientation::apply_orientation(&mut self.state, image, size)
    }
}

impl<E> BootReport<E> {
    fn record(&mut self, detector: DetectorKind, error: StateError) {
        tracing::warn!(%detector, %error, "detector failed during boot");
        self.failures.push(DetectorFailure { detector, error });
    }
}
