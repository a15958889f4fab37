// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM reconciliation: moving state between the store and element attributes.
//!
//! Writes touch exactly one attribute per call. The import pass reads every
//! prefixed attribute in the document into the store without writing anything
//! back.

use alloc::vec::Vec;

use crate::codec::{self, attribute_name, key_from_attribute};
use crate::dom::ElementRepository;
use crate::error::{DomError, StateError};
use crate::store::{Scope, StateStore};
use crate::value::StateValue;

/// Resolves a scope to the element that mirrors it.
///
/// The global scope maps to the root element. A local scope maps to its owner,
/// which must be attached to the document and must not be the root: the root's
/// state attributes belong to the global scope.
pub fn scope_element<D: ElementRepository>(
    document: &D,
    scope: &Scope<D::Element>,
) -> Result<D::Element, StateError> {
    match scope {
        Scope::Global => document.root().ok_or(StateError::InvalidScope),
        Scope::Local(owner)
            if document.contains(owner) && document.root().as_ref() != Some(owner) =>
        {
            Ok(owner.clone())
        }
        Scope::Local(_) => Err(StateError::InvalidScope),
    }
}

/// Mirrors `value` into the attribute for `key` on `element`.
///
/// Rendered values are written; unrendered values (`false`, `null`, `""`,
/// `NaN`) remove the attribute.
pub fn write_attribute<D: ElementRepository>(
    document: &mut D,
    element: &D::Element,
    key: &str,
    value: &StateValue,
) -> Result<(), DomError> {
    let name = attribute_name(key);
    match codec::encode(value) {
        Some(text) => document.set_attribute(element, &name, &text),
        None => document.remove_attribute(element, &name),
    }
}

/// Removes the attribute for `key` from `element`, if present.
pub fn remove_attribute<D: ElementRepository>(
    document: &mut D,
    element: &D::Element,
    key: &str,
) -> Result<(), DomError> {
    document.remove_attribute(element, &attribute_name(key))
}

/// Rewrites every state attribute of `element` from `entries`.
///
/// Prefixed attributes with no matching entry are removed; other attributes
/// are left alone.
pub fn render_element<'a, D, I>(
    document: &mut D,
    element: &D::Element,
    entries: I,
) -> Result<(), DomError>
where
    D: ElementRepository,
    I: IntoIterator<Item = (&'a str, &'a StateValue)>,
{
    let stale: Vec<_> = document
        .attribute_names(element)
        .into_iter()
        .filter(|name| key_from_attribute(name).is_some())
        .collect();
    for name in stale {
        document.remove_attribute(element, &name)?;
    }
    for (key, value) in entries {
        write_attribute(document, element, key, value)?;
    }
    Ok(())
}

/// Imports the state attributes of `element` into `scope`, returning how many
/// entries were read.
fn import_element<D: ElementRepository>(
    document: &D,
    element: &D::Element,
    scope: &Scope<D::Element>,
    store: &mut StateStore<D::Element>,
) -> usize {
    let mut imported = 0;
    for name in document.attribute_names(element) {
        let Some(key) = key_from_attribute(&name) else {
            continue;
        };
        if codec::validate_key(key).is_err() {
            continue;
        }
        let text = document.get_attribute(element, &name).unwrap_or_default();
        store.insert(key, codec::decode(&text), scope);
        imported += 1;
    }
    imported
}

/// Populates `store` from the state attributes present in `document`.
///
/// The root element's attributes become global entries; every other element's
/// attributes become local entries owned by that element. Nothing is written to
/// the document. Returns the number of entries imported.
pub fn import_from_dom<D: ElementRepository>(
    document: &D,
    store: &mut StateStore<D::Element>,
) -> usize {
    let root = document.root();
    let mut imported = 0;
    if let Some(root) = &root {
        imported += import_element(document, root, &Scope::Global, store);
    }
    for element in document.elements() {
        if root.as_ref() == Some(&element) {
            continue;
        }
        let scope = Scope::Local(element.clone());
        imported += import_element(document, &element, &scope, store);
    }
    imported
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;

    #[test]
    fn false_removes_existing_attribute() {
        let mut doc = MemoryDocument::new();
        let root = doc.root_id();
        write_attribute(&mut doc, &root, "open", &StateValue::TRUE).unwrap();
        assert_eq!(doc.attribute(root, "data-bolts-state-open"), Some(""));
        write_attribute(&mut doc, &root, "open", &StateValue::Bool(false)).unwrap();
        assert_eq!(doc.attribute(root, "data-bolts-state-open"), None);
    }

    #[test]
    fn render_element_clears_only_stale_state_attributes() {
        let mut doc = MemoryDocument::new();
        let root = doc.root_id();
        doc.set_attribute(&root, "lang", "en").unwrap();
        doc.set_attribute(&root, "data-bolts-state-old", "x").unwrap();
        doc.set_attribute(&root, "data-other", "y").unwrap();

        let value = StateValue::from(3);
        render_element(&mut doc, &root, [("count", &value)]).unwrap();

        assert_eq!(doc.attribute(root, "lang"), Some("en"));
        assert_eq!(doc.attribute(root, "data-other"), Some("y"));
        assert_eq!(doc.attribute(root, "data-bolts-state-old"), None);
        assert_eq!(doc.attribute(root, "data-bolts-state-count"), Some("3"));
    }

    #[test]
    fn import_skips_foreign_and_bare_prefix_attributes() {
        let mut doc = MemoryDocument::new();
        let root = doc.root_id();
        doc.set_attribute(&root, "data-bolts-state", "").unwrap();
        doc.set_attribute(&root, "data-state-x", "").unwrap();
        doc.set_attribute(&root, "data-bolts-state-ok", "").unwrap();

        let mut store = StateStore::new();
        assert_eq!(import_from_dom(&doc, &mut store), 1);
        assert_eq!(store.get("ok", &Scope::Global), Some(&StateValue::TRUE));
    }

    #[test]
    fn import_does_not_write_the_document() {
        let mut doc = MemoryDocument::new();
        let div = doc.create_element("div");
        doc.set_attribute(&div, "data-bolts-state-n", "0").unwrap();
        let before = doc.attributes(div).to_vec();

        let mut store = StateStore::new();
        import_from_dom(&doc, &mut store);

        assert_eq!(doc.attributes(div), before.as_slice());
        assert_eq!(store.get("n", &Scope::Local(div)), Some(&StateValue::from("0")));
    }

    #[test]
    fn detached_owner_is_an_invalid_scope() {
        let mut doc = MemoryDocument::new();
        let div = doc.create_element("div");
        doc.detach(div);
        assert_eq!(
            scope_element(&doc, &Scope::Local(div)),
            Err(StateError::InvalidScope)
        );
        assert_eq!(scope_element(&doc, &Scope::Global), Ok(doc.root_id()));
    }
}
