// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document seam.
//!
//! The state layer never talks to a concrete DOM. It goes through
//! [`ElementRepository`], which a browser binding implements over
//! `web_sys::Document` and which [`MemoryDocument`](crate::MemoryDocument)
//! implements in memory for tests and headless use.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use crate::error::DomError;

/// Attribute-level access to a document tree.
pub trait ElementRepository {
    /// Opaque element handle. Two handles compare equal exactly when they
    /// refer to the same element.
    type Element: Clone + Eq + Hash + Debug;

    /// Returns the root element (`<html>`), if the document has one.
    fn root(&self) -> Option<Self::Element>;

    /// Returns `true` if `element` is attached to this document.
    fn contains(&self, element: &Self::Element) -> bool;

    /// Returns every element of the document in tree order, root included.
    fn elements(&self) -> Vec<Self::Element>;

    /// Returns the names of the attributes currently set on `element`.
    fn attribute_names(&self, element: &Self::Element) -> Vec<String>;

    /// Reads an attribute.
    fn get_attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Writes an attribute, creating it if needed.
    fn set_attribute(
        &mut self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), DomError>;

    /// Removes an attribute. Removing an absent attribute is not an error.
    fn remove_attribute(&mut self, element: &Self::Element, name: &str) -> Result<(), DomError>;
}
