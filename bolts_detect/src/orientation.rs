// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image orientation: a local `orientation` entry on every image.

use alloc::vec::Vec;
use core::fmt;

use bolts_state::{ElementRepository, Scope, State, StateError};
use kurbo::Size;

/// Local key holding an image's orientation.
pub const ORIENTATION_KEY: &str = "orientation";

/// Aspect classification of an image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Wider than tall.
    Landscape,
    /// Taller than wide.
    Portrait,
    /// Equal sides.
    Square,
}

impl Orientation {
    /// Classifies a size.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else if size.height > size.width {
            Self::Portrait
        } else {
            Self::Square
        }
    }

    /// The attribute text for this orientation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image element as seen by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageInfo<E> {
    /// The `<img>` element.
    pub element: E,
    /// The image's layout size, or `None` until its natural dimensions are
    /// known (the image has not loaded).
    pub size: Option<Size>,
}

/// Records the orientation of `image` in its local scope.
pub fn apply_orientation<D: ElementRepository>(
    state: &mut State<D>,
    image: &D::Element,
    size: Size,
) -> Result<Orientation, StateError> {
    let orientation = Orientation::from_size(size);
    state.set(
        ORIENTATION_KEY,
        orientation.as_str(),
        &Scope::Local(image.clone()),
    )?;
    Ok(orientation)
}

/// The outcome of [`scan_images`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageScan<E> {
    /// Images tagged with their orientation.
    pub tagged: usize,
    /// Images without a size yet. The host measures them again on `load` and
    /// calls [`apply_orientation`].
    pub pending: Vec<E>,
    /// Images that could not be tagged, with the reason.
    pub failed: Vec<(E, StateError)>,
}

impl<E> Default for ImageScan<E> {
    fn default() -> Self {
        Self {
            tagged: 0,
            pending: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Records the orientation of every measured image.
///
/// An image that fails is recorded in [`ImageScan::failed`] and the scan moves
/// on to the next one.
pub fn scan_images<D: ElementRepository>(
    state: &mut State<D>,
    images: impl IntoIterator<Item = ImageInfo<D::Element>>,
) -> ImageScan<D::Element> {
    let mut scan = ImageScan::default();
    for image in images {
        match image.size {
            Some(size) => match apply_orientation(state, &image.element, size) {
                Ok(_) => scan.tagged += 1,
                Err(error) => scan.failed.push((image.element, error)),
            },
            None => scan.pending.push(image.element),
        }
    }
    scan
}
