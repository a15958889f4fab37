// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bolts Web: the browser binding for Bolts.
//!
//! On `wasm32` this crate provides:
//!
//! - `WebDocument`: [`ElementRepository`](bolts::ElementRepository) over
//!   `web_sys::Document`. Elements are addressed by `WebElementId` handles.
//! - `WebHost`: [`DetectionHost`](bolts::DetectionHost) over
//!   `web_sys::Window` (`onmousemove`/`ontouchstart` support, the
//!   `(hover: hover)` media query, the user agent and `document.images`).
//! - `start`: boots Bolts on the page, wires `mouseover`, `resize` and image
//!   `load` listeners, and returns a `BoltsHandle` for page script.
//!
//! ```js
//! import init, { start } from "./bolts_web.js";
//!
//! await init();
//! const bolts = start(JSON.stringify({ detectHoverThreshold: 90 }));
//! bolts.set("theme", "dark");
//! bolts.toggle("menu-open");
//! bolts.toggle("size", ["s", "m", "l"], document.querySelector("#card"));
//! ```
//!
//! The configuration parser and the environment probe are target-independent
//! and tested natively.
//!
//! ## Logging
//!
//! DOM exceptions, listener wiring and boot results are reported through
//! [`tracing`]. Install a subscriber that writes to the browser console to see
//! them.

mod config;
mod probe;
#[cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "only the web document uses the slot table")
)]
mod slots;

#[cfg(target_arch = "wasm32")]
mod document;
#[cfg(target_arch = "wasm32")]
mod handle;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod value;

pub use config::parse_config;
pub use probe::{EnvironmentProbe, HOVER_MEDIA_QUERY, is_mobile_user_agent};

#[cfg(target_arch = "wasm32")]
pub use document::{WebDocument, WebElementId};
#[cfg(target_arch = "wasm32")]
pub use handle::{BoltsHandle, start};
#[cfg(target_arch = "wasm32")]
pub use host::WebHost;
#[cfg(target_arch = "wasm32")]
pub use value::{JsInput, state_error_to_js, state_value_to_js};
