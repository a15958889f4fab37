// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boot configuration.

use bolts_detect::resize::SETTLE_DELAY;
use bolts_timing::Millis;

/// Options for [`Bolts`](crate::Bolts).
///
/// With the `serde` feature the struct deserializes from the same camelCase
/// object a page would pass to the script version, with every field optional:
///
/// ```json
/// { "detectHoverThreshold": 90 }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default, rename_all = "camelCase")
)]
pub struct BoltsConfig {
    /// Minimum confidence (0–100) a hover heuristic needs to set
    /// `detect-hover`. Lowering it to 90 lets the mouse-event heuristic count.
    pub detect_hover_threshold: u8,
    /// Quiet period in milliseconds after which `resizing` is cleared.
    pub resize_settle_ms: Millis,
    /// Whether boot tags images with their orientation.
    pub image_orientation: bool,
}

impl Default for BoltsConfig {
    fn default() -> Self {
        Self {
            detect_hover_threshold: 100,
            resize_settle_ms: SETTLE_DELAY,
            image_orientation: true,
        }
    }
}

impl BoltsConfig {
    /// Sets [`BoltsConfig::detect_hover_threshold`].
    #[must_use]
    pub fn with_detect_hover_threshold(mut self, threshold: u8) -> Self {
        self.detect_hover_threshold = threshold;
        self
    }

    /// Sets [`BoltsConfig::resize_settle_ms`].
    #[must_use]
    pub fn with_resize_settle_ms(mut self, delay: Millis) -> Self {
        self.resize_settle_ms = delay;
        self
    }

    /// Sets [`BoltsConfig::image_orientation`].
    #[must_use]
    pub fn with_image_orientation(mut self, enabled: bool) -> Self {
        self.image_orientation = enabled;
        self
    }
}
