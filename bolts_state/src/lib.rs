// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bolts State: key/value UI state mirrored into DOM attributes.
//!
//! This crate keeps a flat set of state entries and mirrors each one into a
//! `data-bolts-state-<key>` attribute so that CSS and other scripts can react
//! to state declaratively:
//!
//! ```css
//! html[data-bolts-state-resizing] * { transition: none; }
//! img[data-bolts-state-orientation="portrait"] { max-height: 80vh; }
//! ```
//!
//! It is not a reactive framework: there is no virtual DOM, no dependency
//! tracking and no batching. Every write is applied synchronously to exactly one
//! attribute.
//!
//! ## Core Concepts
//!
//! - [`StateValue`]: a string, number, boolean or null.
//! - [`Scope`]: [`Scope::Global`] (the root element) or [`Scope::Local`] (one
//!   element). The same key may exist in many scopes at once.
//! - [`StateStore`]: the in-memory tables, one entry per `(scope, key)`.
//! - [`ElementRepository`]: the document seam. [`MemoryDocument`] implements it
//!   in memory; `bolts_web` implements it over `web_sys`.
//! - [`State`]: a store paired with a document, kept consistent after every
//!   call.
//!
//! ## Attribute format
//!
//! | Value                         | Attribute                 |
//! |-------------------------------|---------------------------|
//! | `true`                        | present, empty            |
//! | non-empty string, any number  | present, the value's text |
//! | `false`, `null`, `""`, `NaN`  | absent                    |
//!
//! Reading back is narrower: an empty attribute imports as `true`, anything
//! else imports as a string (`"0"` stays `"0"`). See [`codec`].
//!
//! ## Quick Start
//!
//! ```rust
//! use bolts_state::{ElementRepository, MemoryDocument, Scope, State, StateValue};
//!
//! // Markup as authored, before any script runs.
//! let mut doc = MemoryDocument::new();
//! let root = doc.root_id();
//! let nav = doc.create_element("nav");
//! doc.set_attribute(&root, "data-bolts-state-bar", "7").unwrap();
//! doc.set_attribute(&nav, "data-bolts-state-foo", "").unwrap();
//!
//! let mut state = State::new(doc);
//! state.import_from_dom();
//! assert_eq!(state.get("bar", &Scope::Global), Some(&StateValue::from("7")));
//! assert_eq!(state.get("foo", &Scope::Local(nav)), Some(&StateValue::TRUE));
//!
//! // Writes go straight to the attribute.
//! state.set("menu", "open", &Scope::Local(nav)).unwrap();
//! assert_eq!(state.document().attribute(nav, "data-bolts-state-menu"), Some("open"));
//!
//! state.remove("menu", &Scope::Local(nav)).unwrap();
//! assert_eq!(state.document().attribute(nav, "data-bolts-state-menu"), None);
//! ```
//!
//! ## Errors
//!
//! Mutations validate before they write. An unsupported value
//! ([`StateError::UnsupportedValue`]), a bad key, a scope whose element is not in
//! the document, or an empty cycle fail without changing anything.
//!
//! ## Features
//!
//! - `serde_json`: accept `serde_json::Value` as a dynamic value. Arrays and
//!   objects are rejected.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod codec;
mod dom;
mod error;
mod memory;
pub mod reconcile;
mod state;
mod store;
mod value;

pub use codec::ATTRIBUTE_PREFIX;
pub use dom::ElementRepository;
pub use error::{DomError, StateError};
pub use memory::{ElementId, MemoryDocument};
pub use state::{State, SyncMode, Toggle};
pub use store::{Scope, StateStore};
pub use value::{IntoStateValue, StateValue};
