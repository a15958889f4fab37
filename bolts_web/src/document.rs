// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ElementRepository`] over `web_sys::Document`.

use std::cell::RefCell;
use std::rc::Rc;

use bolts::{DomError, ElementRepository};
use js_sys::WeakMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::slots::SlotTable;

/// Handle to an element of a [`WebDocument`].
///
/// JS objects are neither hashable nor totally ordered from Rust, so elements
/// are numbered the first time the document hands them out. Handles of
/// elements removed from the page are dropped by
/// [`WebDocument::release_detached`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WebElementId(u32);

/// Element numbering shared by every clone of a [`WebDocument`].
#[derive(Debug)]
struct Registry {
    ids: WeakMap,
    elements: RefCell<SlotTable<Element>>,
}

impl Registry {
    fn id_of(&self, element: &Element) -> WebElementId {
        if let Some(id) = self.ids.get(element.as_ref()).as_f64() {
            #[expect(clippy::cast_possible_truncation, reason = "ids are stored from u32")]
            let id = id as u32;
            return WebElementId(id);
        }
        let id = self.elements.borrow_mut().insert(element.clone());
        self.ids.set(element.as_ref(), &JsValue::from(id));
        WebElementId(id)
    }

    fn get(&self, id: WebElementId) -> Option<Element> {
        self.elements.borrow().get(id.0).cloned()
    }

    fn release(&self, keep: impl FnMut(&Element) -> bool) -> Vec<WebElementId> {
        let mut elements = self.elements.borrow_mut();
        let released = elements.retain(keep);
        let ids = released
            .into_iter()
            .map(|(id, element)| {
                self.ids.delete(element.as_ref());
                WebElementId(id)
            })
            .collect::<Vec<_>>();
        tracing::debug!(released = ids.len(), numbered = elements.len(), "released elements");
        ids
    }
}

/// A browser document seen through [`ElementRepository`].
///
/// Clones share element numbering, so a handle from one clone is valid in all
/// of them.
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: Document,
    registry: Rc<Registry>,
}

impl WebDocument {
    /// Wraps `document`.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            registry: Rc::new(Registry {
                ids: WeakMap::new(),
                elements: RefCell::new(SlotTable::default()),
            }),
        }
    }

    /// The wrapped document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the handle for `element`, numbering it if needed.
    pub fn element_id(&self, element: &Element) -> WebElementId {
        self.registry.id_of(element)
    }

    /// Returns the element behind `id`.
    pub fn element(&self, id: WebElementId) -> Option<Element> {
        self.registry.get(id)
    }

    /// Forgets every numbered element that is no longer in the document and
    /// returns the released handles.
    ///
    /// A released handle never resolves again. If its element is re-inserted
    /// it gets a new handle.
    pub fn release_detached(&self) -> Vec<WebElementId> {
        self.registry
            .release(|element| self.document.contains(Some(element.as_ref())))
    }

    fn attached(&self, id: &WebElementId) -> Result<Element, DomError> {
        self.element(*id)
            .filter(|element| self.document.contains(Some(element.as_ref())))
            .ok_or(DomError::UnknownElement)
    }
}

/// Converts a JS exception into a [`DomError`], logging it.
pub(crate) fn host_error(error: JsValue) -> DomError {
    let message = error
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{error:?}"));
    tracing::warn!(%message, "DOM call threw");
    DomError::Host(message)
}

impl ElementRepository for WebDocument {
    type Element = WebElementId;

    fn root(&self) -> Option<WebElementId> {
        self.document
            .document_element()
            .map(|root| self.element_id(&root))
    }

    fn contains(&self, element: &WebElementId) -> bool {
        self.attached(element).is_ok()
    }

    fn elements(&self) -> Vec<WebElementId> {
        let list = match self.document.query_selector_all("*") {
            Ok(list) => list,
            Err(error) => {
                host_error(error);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.element_id(&element))
            .collect()
    }

    fn attribute_names(&self, element: &WebElementId) -> Vec<String> {
        let Ok(element) = self.attached(element) else {
            return Vec::new();
        };
        element
            .get_attribute_names()
            .iter()
            .filter_map(|name| name.as_string())
            .collect()
    }

    fn get_attribute(&self, element: &WebElementId, name: &str) -> Option<String> {
        self.attached(element).ok()?.get_attribute(name)
    }

    fn set_attribute(
        &mut self,
        element: &WebElementId,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        self.attached(element)?
            .set_attribute(name, value)
            .map_err(host_error)
    }

    fn remove_attribute(&mut self, element: &WebElementId, name: &str) -> Result<(), DomError> {
        self.attached(element)?
            .remove_attribute(name)
            .map_err(host_error)
    }
}
