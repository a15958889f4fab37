// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State values and conversions into them.
//!
//! [`StateValue`] is the closed set of values a state entry may hold. Static
//! Rust inputs convert infallibly through [`From`]; dynamic inputs (such as
//! `serde_json::Value` or values coming from JavaScript) go through
//! [`IntoStateValue`], which rejects anything that is not a string, number,
//! boolean or null.

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;

use crate::codec::format_number;
use crate::error::StateError;

/// A value stored under a state key.
#[derive(Clone, Debug, PartialEq)]
pub enum StateValue {
    /// A string value. Rendered verbatim; the empty string is not rendered.
    Str(String),
    /// A numeric value. Every number except `NaN` is rendered, including zero.
    Number(f64),
    /// A boolean. `true` renders as an empty attribute, `false` is not rendered.
    Bool(bool),
    /// Explicit null. Never rendered.
    Null,
}

impl StateValue {
    /// The flag value used when no explicit value is given.
    pub const TRUE: Self = Self::Bool(true);

    /// Returns the JavaScript-style truthiness of the value.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
            Self::Null => false,
        }
    }

    /// Returns `true` if the value is mirrored as an attribute.
    ///
    /// A value is rendered when it is truthy or numerically zero.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.is_truthy() || matches!(self, Self::Number(n) if *n == 0.0)
    }

    /// Returns the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric payload, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the value's kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
        }
    }
}

impl Default for StateValue {
    fn default() -> Self {
        Self::TRUE
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for StateValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for StateValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for StateValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Conversion of a possibly dynamic input into a [`StateValue`].
///
/// Implemented for every type that converts into [`StateValue`] infallibly, and
/// for `serde_json::Value` when the `serde_json` feature is enabled. Arrays and
/// objects are rejected with [`StateError::UnsupportedValue`].
pub trait IntoStateValue {
    /// Validates and converts the input.
    fn into_state_value(self) -> Result<StateValue, StateError>;
}

macro_rules! infallible_state_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoStateValue for $ty {
                #[inline]
                fn into_state_value(self) -> Result<StateValue, StateError> {
                    Ok(StateValue::from(self))
                }
            }
        )*
    };
}

infallible_state_value!(StateValue, bool, f64, f32, i32, u32, String);

impl IntoStateValue for &str {
    #[inline]
    fn into_state_value(self) -> Result<StateValue, StateError> {
        Ok(StateValue::from(self))
    }
}

impl IntoStateValue for &StateValue {
    #[inline]
    fn into_state_value(self) -> Result<StateValue, StateError> {
        Ok(self.clone())
    }
}

impl<T: IntoStateValue> IntoStateValue for Option<T> {
    fn into_state_value(self) -> Result<StateValue, StateError> {
        match self {
            Some(value) => value.into_state_value(),
            None => Ok(StateValue::Null),
        }
    }
}

#[cfg(feature = "serde_json")]
impl IntoStateValue for &serde_json::Value {
    fn into_state_value(self) -> Result<StateValue, StateError> {
        use serde_json::Value;

        match self {
            Value::Null => Ok(StateValue::Null),
            Value::Bool(b) => Ok(StateValue::Bool(*b)),
            Value::Number(n) => n
                .as_f64()
                .map(StateValue::Number)
                .ok_or(StateError::UnsupportedValue { kind: "number" }),
            Value::String(s) => Ok(StateValue::Str(s.clone())),
            Value::Array(_) => Err(StateError::UnsupportedValue { kind: "array" }),
            Value::Object(_) => Err(StateError::UnsupportedValue { kind: "object" }),
        }
    }
}

#[cfg(feature = "serde_json")]
impl IntoStateValue for serde_json::Value {
    fn into_state_value(self) -> Result<StateValue, StateError> {
        (&self).into_state_value()
    }
}
