// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document.
//!
//! [`MemoryDocument`] is a flat element list with HTML attribute semantics:
//! attribute names are ASCII-lowercased, and names that a browser would reject
//! with `InvalidCharacterError` are rejected with
//! [`DomError::InvalidAttributeName`]. Elements are kept in creation order,
//! which stands in for tree order.
//!
//! ```rust
//! use bolts_state::{MemoryDocument, Scope, State};
//!
//! let mut doc = MemoryDocument::new();
//! let img = doc.create_element("img");
//!
//! let mut state = State::new(doc);
//! state.set("orientation", "portrait", &Scope::Local(img)).unwrap();
//!
//! assert_eq!(
//!     state.document().attribute(img, "data-bolts-state-orientation"),
//!     Some("portrait")
//! );
//! ```

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::dom::ElementRepository;
use crate::error::DomError;

/// Handle to an element of a [`MemoryDocument`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    /// Returns the raw index of this element.
    #[must_use]
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Node {
    tag: String,
    attributes: SmallVec<[(String, String); 4]>,
    attached: bool,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: SmallVec::new(),
            attached: true,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|(n, _)| n == name)
    }
}

/// A document held entirely in memory.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document containing only the `<html>` root element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: alloc::vec![Node::new("html")],
        }
    }

    /// Returns the handle of the root element.
    #[must_use]
    #[inline]
    pub fn root_id(&self) -> ElementId {
        ElementId(0)
    }

    /// Appends a new element with the given tag name.
    ///
    /// # Panics
    ///
    /// Panics if the document already holds `u32::MAX` elements.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = u32::try_from(self.nodes.len()).expect("too many elements in MemoryDocument");
        self.nodes.push(Node::new(tag));
        ElementId(id)
    }

    /// Detaches an element. Its handle stays valid but no longer belongs to the
    /// document. The root cannot be detached.
    pub fn detach(&mut self, id: ElementId) {
        if id != self.root_id()
            && let Some(node) = self.nodes.get_mut(id.index())
        {
            node.attached = false;
        }
    }

    /// Returns the lowercase tag name of an attached element.
    #[must_use]
    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.node(id).map(|node| node.tag.as_str())
    }

    /// Returns the attached elements with the given tag name, in tree order.
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = ElementId> + 'a {
        self.attached()
            .filter(move |(_, node)| node.tag.eq_ignore_ascii_case(tag))
            .map(|(id, _)| id)
    }

    /// Borrows an attribute value.
    #[must_use]
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        let node = self.node(id)?;
        let name = name.to_ascii_lowercase();
        node.position(&name).map(|i| node.attributes[i].1.as_str())
    }

    /// Returns the attributes of an element in insertion order.
    #[must_use]
    pub fn attributes(&self, id: ElementId) -> &[(String, String)] {
        self.node(id).map_or(&[], |node| node.attributes.as_slice())
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.index()).filter(|node| node.attached)
    }

    fn node_mut(&mut self, id: ElementId) -> Result<&mut Node, DomError> {
        self.nodes
            .get_mut(id.index())
            .filter(|node| node.attached)
            .ok_or(DomError::UnknownElement)
    }

    fn attached(&self) -> impl Iterator<Item = (ElementId, &Node)> + '_ {
        self.nodes
            .iter()
            .zip(0_u32..)
            .filter(|(node, _)| node.attached)
            .map(|(node, i)| (ElementId(i), node))
    }
}

fn check_attribute_name(name: &str) -> Result<String, DomError> {
    let valid = !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
        });
    if valid {
        Ok(name.to_ascii_lowercase())
    } else {
        Err(DomError::InvalidAttributeName(name.to_owned()))
    }
}

impl ElementRepository for MemoryDocument {
    type Element = ElementId;

    fn root(&self) -> Option<ElementId> {
        Some(self.root_id())
    }

    fn contains(&self, element: &ElementId) -> bool {
        self.node(*element).is_some()
    }

    fn elements(&self) -> Vec<ElementId> {
        self.attached().map(|(id, _)| id).collect()
    }

    fn attribute_names(&self, element: &ElementId) -> Vec<String> {
        self.attributes(*element)
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn get_attribute(&self, element: &ElementId, name: &str) -> Option<String> {
        self.attribute(*element, name).map(ToOwned::to_owned)
    }

    fn set_attribute(
        &mut self,
        element: &ElementId,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        let name = check_attribute_name(name)?;
        let node = self.node_mut(*element)?;
        match node.position(&name) {
            Some(i) => {
                let slot = &mut node.attributes[i].1;
                slot.clear();
                slot.push_str(value);
            }
            None => node.attributes.push((name, value.to_owned())),
        }
        Ok(())
    }

    fn remove_attribute(&mut self, element: &ElementId, name: &str) -> Result<(), DomError> {
        let name = name.to_ascii_lowercase();
        let node = self.node_mut(*element)?;
        if let Some(i) = node.position(&name) {
            node.attributes.remove(i);
        }
        Ok(())
    }
}
