// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page entry point and the script-facing handle.

#![allow(
    unsafe_code,
    reason = "`#[wasm_bindgen]` exports expand to unsafe ABI glue"
)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bolts::{Bolts, ElementRepository, IntoStateValue, Millis, Scope, StateError, Toggle};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, HtmlImageElement, Window};

use crate::config::parse_config;
use crate::document::{WebDocument, WebElementId};
use crate::host::{WebHost, image_size};
use crate::value::{JsInput, state_error_to_js, state_value_to_js};

type Runtime = Rc<RefCell<Bolts<WebDocument>>>;

/// An event listener that is removed when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn add(
        target: &EventTarget,
        event: &'static str,
        once: bool,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_once(once);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        tracing::debug!(event, once, "listener added");
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        // Ignored: removing a listener that already fired once is a no-op.
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

/// Settles the `resizing` flag with a single pending timeout.
struct ResizeTimer {
    window: Window,
    handle: Cell<Option<i32>>,
    poll: Closure<dyn FnMut()>,
}

impl ResizeTimer {
    fn new(window: Window, runtime: Runtime, host: WebHost) -> Self {
        let poll = Closure::<dyn FnMut()>::new(move || {
            let now = host.now();
            if let Err(error) = runtime.borrow_mut().poll_resize(now) {
                tracing::warn!(%error, "clearing the resize flag failed");
            }
        });
        Self {
            window,
            handle: Cell::new(None),
            poll,
        }
    }

    fn schedule(&self, delay: Millis) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        let delay = i32::try_from(delay).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.poll.as_ref().unchecked_ref(),
                delay,
            ) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(error) => tracing::warn!(?error, "setTimeout failed"),
        }
    }
}

impl Drop for ResizeTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl std::fmt::Debug for ResizeTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeTimer")
            .field("handle", &self.handle.get())
            .finish_non_exhaustive()
    }
}

/// A running Bolts instance, as seen from page script.
///
/// Every method takes an optional element: omitted means the global scope on
/// `<html>`, given means the element's local scope. Invalid keys, unsupported
/// values and detached elements throw.
///
/// Dropping the handle (`free()` from script) removes every listener Bolts
/// added.
#[wasm_bindgen]
#[derive(Debug)]
pub struct BoltsHandle {
    runtime: Runtime,
    document: WebDocument,
    /// Removed from their targets on drop.
    _listeners: Vec<Listener>,
}

impl BoltsHandle {
    fn scope(&self, owner: Option<Element>) -> Scope<WebElementId> {
        match owner {
            None => Scope::Global,
            Some(element) => Scope::Local(self.document.element_id(&element)),
        }
    }
}

fn throw(error: StateError) -> JsValue {
    state_error_to_js(&error)
}

#[wasm_bindgen]
impl BoltsHandle {
    /// Returns the value of `key`, or `undefined` when unset.
    pub fn get(&self, key: &str, owner: Option<Element>) -> JsValue {
        let scope = self.scope(owner);
        self.runtime
            .borrow()
            .state()
            .get(key, &scope)
            .map_or(JsValue::UNDEFINED, state_value_to_js)
    }

    /// Returns every entry of the scope as a plain object.
    #[wasm_bindgen(js_name = getAll)]
    pub fn get_all(&self, owner: Option<Element>) -> Result<js_sys::Object, JsValue> {
        let scope = self.scope(owner);
        let object = js_sys::Object::new();
        for (key, value) in self.runtime.borrow().state().get_all(&scope) {
            js_sys::Reflect::set(&object, &JsValue::from_str(&key), &state_value_to_js(&value))?;
        }
        Ok(object)
    }

    /// Sets `key`. An omitted value sets the flag (`true`).
    pub fn set(&self, key: &str, value: JsValue, owner: Option<Element>) -> Result<(), JsValue> {
        let scope = self.scope(owner);
        let mut runtime = self.runtime.borrow_mut();
        let state = runtime.state_mut();
        let result = if value.is_undefined() {
            state.set_flag(key, &scope)
        } else {
            state.set(key, JsInput(&value), &scope)
        };
        result.map_err(throw)
    }

    /// Removes `key`. Removing an unset key does nothing.
    pub fn remove(&self, key: &str, owner: Option<Element>) -> Result<(), JsValue> {
        let scope = self.scope(owner);
        self.runtime
            .borrow_mut()
            .state_mut()
            .remove(key, &scope)
            .map_err(throw)
    }

    /// Toggles `key`.
    ///
    /// With no value the flag flips between `true` and unset; with a single
    /// value it flips between that value and unset; with an array it advances
    /// through the array's values.
    pub fn toggle(&self, key: &str, values: JsValue, owner: Option<Element>) -> Result<(), JsValue> {
        let scope = self.scope(owner);
        let mode = if values.is_undefined() {
            Toggle::Flag
        } else if let Some(array) = values.dyn_ref::<js_sys::Array>() {
            let items: Vec<JsValue> = array.iter().collect();
            Toggle::cycle(items.iter().map(JsInput)).map_err(throw)?
        } else {
            Toggle::Value(JsInput(&values).into_state_value().map_err(throw)?)
        };
        self.runtime
            .borrow_mut()
            .state_mut()
            .toggle(key, &mode, &scope)
            .map_err(throw)
    }

    /// Re-reads state attributes written into the document by other scripts.
    /// Returns the number of entries imported.
    ///
    /// Elements removed from the page since the last sweep are released first,
    /// along with their local state.
    #[wasm_bindgen(js_name = importFromDom)]
    pub fn import_from_dom(&self) -> usize {
        self.release_detached();
        self.runtime.borrow_mut().state_mut().import_from_dom()
    }

    /// Drops Bolts' references to elements no longer in the page, along with
    /// their local state. Returns the number of elements released.
    #[wasm_bindgen(js_name = releaseDetached)]
    pub fn release_detached(&self) -> usize {
        let released = self.document.release_detached();
        let mut runtime = self.runtime.borrow_mut();
        let state = runtime.state_mut();
        for id in &released {
            state.forget_owner(id);
        }
        released.len()
    }
}

/// Boots Bolts on the current page.
///
/// `config` is an optional JSON object such as
/// `{"detectHoverThreshold": 90, "resizeSettleMs": 50, "imageOrientation": true}`.
/// Call once the document is parsed.
#[wasm_bindgen]
pub fn start(config: Option<String>) -> Result<BoltsHandle, JsValue> {
    let config = parse_config(config.as_deref())
        .map_err(|error| js_sys::Error::new(&format!("invalid Bolts config: {error}")))?;
    let window = web_sys::window().ok_or_else(|| js_sys::Error::new("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| js_sys::Error::new("no document"))?;

    let document = WebDocument::new(document);
    if document.root().is_none() {
        return Err(js_sys::Error::new("document has no root element").into());
    }
    let host = WebHost::new(window.clone(), document.clone());
    let runtime: Runtime = Rc::new(RefCell::new(Bolts::new(document.clone(), config)));

    let report = runtime.borrow_mut().boot(&host);
    tracing::info!(
        imported = report.imported,
        failures = report.failures.len(),
        "Bolts booted"
    );

    let mut listeners = Vec::new();
    let target: &EventTarget = window.as_ref();

    if report.awaits_mouseover() {
        let runtime = runtime.clone();
        listeners.push(Listener::add(target, "mouseover", true, move |_| {
            if let Err(error) = runtime.borrow_mut().on_mouseover() {
                tracing::warn!(%error, "recording hover capability failed");
            }
        })?);
    }

    {
        let runtime = runtime.clone();
        let timer = ResizeTimer::new(window.clone(), runtime.clone(), host.clone());
        let host = host.clone();
        listeners.push(Listener::add(target, "resize", false, move |_| {
            let now = host.now();
            match runtime.borrow_mut().on_resize(now) {
                Ok(Some(deadline)) => timer.schedule(deadline.saturating_sub(now)),
                Ok(None) => {}
                Err(error) => tracing::warn!(%error, "recording resize failed"),
            }
        })?);
    }

    for id in report.pending_images {
        let Some(element) = document.element(id) else {
            continue;
        };
        let runtime = runtime.clone();
        let image = element.clone();
        listeners.push(Listener::add(element.as_ref(), "load", true, move |_| {
            let Some(size) = image.dyn_ref::<HtmlImageElement>().and_then(image_size) else {
                return;
            };
            if let Err(error) = runtime.borrow_mut().on_image_load(&id, size) {
                tracing::warn!(%error, "tagging image orientation failed");
            }
        })?);
    }

    Ok(BoltsHandle {
        runtime,
        document,
        _listeners: listeners,
    })
}
