// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted page: an in-memory document plus canned device answers.

use std::fmt::Write;

use bolts::{
    DetectionHost, ElementId, ElementRepository, ImageInfo, InputSignals, MemoryDocument,
};
use kurbo::Size;

/// An image on the page and the size it reports once loaded.
#[derive(Clone, Debug)]
pub struct PageImage {
    /// The `<img>` element.
    pub element: ElementId,
    /// Its rendered size.
    pub size: Size,
    /// Whether it had loaded before boot.
    pub loaded: bool,
}

/// A device profile answering [`DetectionHost`] queries.
#[derive(Clone, Debug)]
pub struct ScriptedHost {
    /// Signals reported to the hover detector.
    pub signals: InputSignals,
    /// Images in the document.
    pub images: Vec<PageImage>,
}

impl DetectionHost<ElementId> for ScriptedHost {
    fn input_signals(&self) -> InputSignals {
        self.signals
    }

    fn images(&self) -> Vec<ImageInfo<ElementId>> {
        self.images
            .iter()
            .map(|image| ImageInfo {
                element: image.element,
                size: image.loaded.then_some(image.size),
            })
            .collect()
    }
}

/// Builds a small article page: server-rendered theme state on `<html>`, a
/// loaded hero image and a lazy thumbnail.
pub fn article(signals: InputSignals) -> (MemoryDocument, ScriptedHost) {
    let mut doc = MemoryDocument::new();
    let root = doc.root_id();
    let _ = doc.set_attribute(&root, "data-bolts-state-theme", "dark");

    let hero = doc.create_element("img");
    let thumb = doc.create_element("img");
    let card = doc.create_element("section");
    let _ = doc.set_attribute(&card, "data-bolts-state-expanded", "");

    let host = ScriptedHost {
        signals,
        images: vec![
            PageImage {
                element: hero,
                size: Size::new(1280.0, 720.0),
                loaded: true,
            },
            PageImage {
                element: thumb,
                size: Size::new(200.0, 200.0),
                loaded: false,
            },
        ],
    };
    (doc, host)
}

/// Renders the `data-bolts-state-*` attributes of every element, one per line.
pub fn dump_state_attributes(doc: &MemoryDocument) -> String {
    let mut out = String::new();
    for element in doc.elements() {
        for (name, value) in doc.attributes(element) {
            if name.starts_with(bolts::ATTRIBUTE_PREFIX) {
                let _ = writeln!(
                    out,
                    "<{} #{}> {name}={value:?}",
                    doc.tag(element).unwrap_or("?"),
                    element.index()
                );
            }
        }
    }
    out
}
