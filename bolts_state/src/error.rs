// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for state operations and document access.

use alloc::string::String;
use core::fmt;

/// Error raised by an [`ElementRepository`](crate::ElementRepository) when it
/// cannot apply an attribute change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomError {
    /// The attribute name is not a valid DOM attribute name.
    InvalidAttributeName(String),
    /// The element handle does not belong to this document.
    UnknownElement,
    /// The host DOM rejected the operation (for example a JavaScript exception).
    Host(String),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAttributeName(name) => write!(f, "invalid attribute name {name:?}"),
            Self::UnknownElement => f.write_str("element does not belong to this document"),
            Self::Host(message) => write!(f, "host DOM error: {message}"),
        }
    }
}

impl core::error::Error for DomError {}

/// Error returned by the mutating operations of [`State`](crate::State).
///
/// Every variant is raised before the store is modified, so a failed call
/// leaves both the store and the document exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// The value is not a string, number, boolean or null.
    UnsupportedValue {
        /// Name of the rejected input kind, such as `"array"` or `"object"`.
        kind: &'static str,
    },
    /// The key is empty or cannot be used as the tail of an attribute name.
    InvalidKey(String),
    /// The scope has no element in the document (a detached or foreign owner,
    /// or a global write on a document without a root element).
    InvalidScope,
    /// A cycle toggle was given no candidate values.
    EmptyCycle,
    /// The document rejected the attribute write.
    Dom(DomError),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedValue { kind } => write!(
                f,
                "unsupported value type `{kind}`: state values must be a string, number, boolean or null"
            ),
            Self::InvalidKey(key) => write!(f, "invalid state key {key:?}"),
            Self::InvalidScope => f.write_str("scope does not resolve to an element in the document"),
            Self::EmptyCycle => f.write_str("cycle toggle needs at least one value"),
            Self::Dom(err) => write!(f, "failed to reconcile the document: {err}"),
        }
    }
}

impl core::error::Error for StateError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Dom(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomError> for StateError {
    fn from(err: DomError) -> Self {
        Self::Dom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::error::Error;

    #[test]
    fn dom_error_is_the_source() {
        let err = StateError::from(DomError::UnknownElement);
        assert!(err.source().is_some(), "Dom variant should expose its cause");
        assert!(StateError::EmptyCycle.source().is_none(), "leaf variants have no source");
    }

    #[test]
    fn unsupported_value_names_the_kind() {
        let msg = StateError::UnsupportedValue { kind: "object" }.to_string();
        assert!(msg.contains("object"), "message was {msg}");
    }
}
