// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`DetectionHost`] over `web_sys::Window`.

use bolts::{DetectionHost, ImageInfo, InputSignals, Millis};
use kurbo::Size;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlImageElement, Window};

use crate::document::{WebDocument, WebElementId};
use crate::probe::{EnvironmentProbe, HOVER_MEDIA_QUERY};

/// Answers detector queries from the live browser environment.
#[derive(Clone, Debug)]
pub struct WebHost {
    window: Window,
    document: WebDocument,
}

impl WebHost {
    /// Creates a host for `window`, numbering elements through `document`.
    pub fn new(window: Window, document: WebDocument) -> Self {
        Self { window, document }
    }

    /// Reads the raw input facts from the window.
    pub fn probe(&self) -> EnvironmentProbe {
        let has = |name: &str| {
            js_sys::Reflect::has(self.window.as_ref(), &JsValue::from_str(name)).unwrap_or(false)
        };
        EnvironmentProbe {
            has_mousemove: has("onmousemove"),
            has_touchstart: has("ontouchstart"),
            hover_media: self
                .window
                .match_media(HOVER_MEDIA_QUERY)
                .ok()
                .flatten()
                .is_some_and(|query| query.matches()),
            user_agent: self.window.navigator().user_agent().unwrap_or_default(),
        }
    }

    /// Milliseconds since page load, from `performance.now()`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "page uptime in ms fits in u64; the fraction is dropped"
    )]
    pub fn now(&self) -> Millis {
        self.window.performance().map_or(0.0, |p| p.now()).max(0.0) as Millis
    }
}

/// The rendered size of `image`, or `None` until it has natural dimensions.
pub(crate) fn image_size(image: &HtmlImageElement) -> Option<Size> {
    if image.natural_width() == 0 || image.natural_height() == 0 {
        return None;
    }
    Some(Size::new(f64::from(image.width()), f64::from(image.height())))
}

impl DetectionHost<WebElementId> for WebHost {
    fn input_signals(&self) -> InputSignals {
        self.probe().signals()
    }

    fn images(&self) -> Vec<ImageInfo<WebElementId>> {
        let images = self.document.document().images();
        (0..images.length())
            .filter_map(|index| images.item(index))
            .filter_map(|element| {
                let size = image_size(element.dyn_ref::<HtmlImageElement>()?);
                Some(ImageInfo {
                    element: self.document.element_id(&element),
                    size,
                })
            })
            .collect()
    }
}
