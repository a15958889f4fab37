// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between JS values and [`StateValue`].

use bolts::{IntoStateValue, StateError, StateValue};
use wasm_bindgen::JsValue;

/// A JS value passed in by page script, validated on conversion.
///
/// Strings, numbers, booleans and `null`/`undefined` are accepted. Arrays,
/// functions and other objects are rejected.
#[derive(Debug)]
pub struct JsInput<'a>(pub &'a JsValue);

impl IntoStateValue for JsInput<'_> {
    fn into_state_value(self) -> Result<StateValue, StateError> {
        let value = self.0;
        if value.is_undefined() || value.is_null() {
            return Ok(StateValue::Null);
        }
        if let Some(flag) = value.as_bool() {
            return Ok(StateValue::Bool(flag));
        }
        if let Some(number) = value.as_f64() {
            return Ok(StateValue::Number(number));
        }
        if let Some(text) = value.as_string() {
            return Ok(StateValue::Str(text));
        }
        let kind = if js_sys::Array::is_array(value) {
            "array"
        } else if value.is_function() {
            "function"
        } else if value.is_symbol() {
            "symbol"
        } else if value.is_bigint() {
            "bigint"
        } else {
            "object"
        };
        Err(StateError::UnsupportedValue { kind })
    }
}

/// Converts a stored value back for page script.
pub fn state_value_to_js(value: &StateValue) -> JsValue {
    match value {
        StateValue::Str(text) => JsValue::from_str(text),
        StateValue::Number(number) => JsValue::from_f64(*number),
        StateValue::Bool(flag) => JsValue::from_bool(*flag),
        StateValue::Null => JsValue::NULL,
    }
}

/// Converts a [`StateError`] into a JS `Error` to throw.
pub fn state_error_to_js(error: &StateError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}
