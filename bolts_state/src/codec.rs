// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute codec: the textual form of state values in the DOM.
//!
//! The format is the contract other code (CSS selectors, other scripts) relies
//! on, so it is bit-exact:
//!
//! | Value                         | Attribute `data-bolts-state-<key>` |
//! |-------------------------------|------------------------------------|
//! | `true`                        | present, empty                     |
//! | non-empty string              | present, the string                |
//! | number other than `NaN`       | present, the number's text         |
//! | `false`, `null`, `""`, `NaN`  | absent                             |
//!
//! Decoding is deliberately narrower: an empty attribute reads back as `true`,
//! anything else reads back as a string. `"0"` stays the string `"0"`.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};

use crate::error::StateError;
use crate::value::StateValue;

/// Prefix shared by every state attribute.
pub const ATTRIBUTE_PREFIX: &str = "data-bolts-state-";

/// Returns the attribute name that mirrors `key`.
#[must_use]
pub fn attribute_name(key: &str) -> String {
    let mut name = String::with_capacity(ATTRIBUTE_PREFIX.len() + key.len());
    name.push_str(ATTRIBUTE_PREFIX);
    name.push_str(key);
    name
}

/// Extracts the state key from an attribute name.
///
/// Returns `None` for attributes outside the state namespace, and for the bare
/// prefix with no key.
#[must_use]
pub fn key_from_attribute(name: &str) -> Option<&str> {
    name.strip_prefix(ATTRIBUTE_PREFIX).filter(|key| !key.is_empty())
}

/// Encodes a value as attribute text, or `None` if the attribute must be absent.
#[must_use]
pub fn encode(value: &StateValue) -> Option<Cow<'_, str>> {
    match value {
        StateValue::Bool(true) => Some(Cow::Borrowed("")),
        StateValue::Bool(false) | StateValue::Null => None,
        StateValue::Str(s) if s.is_empty() => None,
        StateValue::Str(s) => Some(Cow::Borrowed(s)),
        StateValue::Number(n) if n.is_nan() => None,
        StateValue::Number(n) => Some(Cow::Owned(format_number(*n))),
    }
}

/// Decodes attribute text read from the document.
#[must_use]
pub fn decode(text: &str) -> StateValue {
    if text.is_empty() {
        StateValue::TRUE
    } else {
        StateValue::Str(text.to_string())
    }
}

/// Formats a number the way JavaScript's `String(number)` does.
///
/// Integral values carry no fraction, `-0` prints as `0`, and the infinities
/// print as `Infinity`. Magnitudes of `1e21` and above, or below `1e-6`, use
/// the shortest exponent form with an explicit sign (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        format!("{n}")
    }
}

/// Checks that `key` can be appended to [`ATTRIBUTE_PREFIX`] to form a valid
/// attribute name.
///
/// ASCII uppercase is rejected: HTML lowercases attribute names, so `menuOpen`
/// and `menuopen` would share one attribute while being two entries.
pub fn validate_key(key: &str) -> Result<(), StateError> {
    let valid = !key.is_empty()
        && !key.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || c.is_ascii_uppercase()
                || matches!(c, '"' | '\'' | '>' | '/' | '=')
        });
    if valid {
        Ok(())
    } else {
        Err(StateError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_encodes_as_empty_attribute() {
        assert_eq!(encode(&StateValue::TRUE).as_deref(), Some(""));
    }

    #[test]
    fn zero_encodes_as_text() {
        assert_eq!(encode(&StateValue::from(0)).as_deref(), Some("0"));
        assert_eq!(encode(&StateValue::Number(-0.0)).as_deref(), Some("0"));
    }

    #[test]
    fn unrendered_values_encode_to_none() {
        assert_eq!(encode(&StateValue::Bool(false)), None);
        assert_eq!(encode(&StateValue::Null), None);
        assert_eq!(encode(&StateValue::from("")), None);
        assert_eq!(encode(&StateValue::Number(f64::NAN)), None);
    }

    #[test]
    fn numbers_format_like_javascript() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-1.5e-7), "-1.5e-7");
    }

    #[test]
    fn empty_text_decodes_to_true() {
        assert_eq!(decode(""), StateValue::TRUE);
    }

    #[test]
    fn numeric_text_stays_a_string() {
        assert_eq!(decode("0"), StateValue::from("0"));
        assert_eq!(decode("7"), StateValue::from("7"));
        assert_eq!(decode("true"), StateValue::from("true"));
    }

    #[test]
    fn attribute_names_round_trip_keys() {
        let name = attribute_name("detect-hover");
        assert_eq!(name, "data-bolts-state-detect-hover");
        assert_eq!(key_from_attribute(&name), Some("detect-hover"));
        assert_eq!(key_from_attribute("data-bolts-state-"), None);
        assert_eq!(key_from_attribute("data-bolts-state"), None);
        assert_eq!(key_from_attribute("class"), None);
    }

    #[test]
    fn keys_must_be_attribute_safe() {
        assert!(validate_key("orientation").is_ok());
        assert!(validate_key("detect-hover").is_ok());
        for bad in ["", "two words", "a=b", "quote\"", "slash/", "tab\t", "menuOpen"] {
            assert!(
                matches!(validate_key(bad), Err(StateError::InvalidKey(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
