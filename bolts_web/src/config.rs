// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-supplied configuration.

use bolts::BoltsConfig;

/// Parses the JSON object a page passes to `start`.
///
/// A missing or blank string yields the defaults; missing fields fall back to
/// their defaults individually.
pub fn parse_config(json: Option<&str>) -> Result<BoltsConfig, serde_json::Error> {
    match json.map(str::trim) {
        None | Some("") => Ok(BoltsConfig::default()),
        Some(text) => serde_json::from_str(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_is_default() {
        assert_eq!(parse_config(None).unwrap(), BoltsConfig::default());
        assert_eq!(parse_config(Some("  ")).unwrap(), BoltsConfig::default());
        assert_eq!(parse_config(Some("{}")).unwrap(), BoltsConfig::default());
    }

    #[test]
    fn fields_are_camel_case() {
        let config =
            parse_config(Some(r#"{"detectHoverThreshold":90,"imageOrientation":false}"#)).unwrap();
        assert_eq!(config.detect_hover_threshold, 90);
        assert!(!config.image_orientation);
        assert_eq!(config.resize_settle_ms, 50);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_config(Some("{ detectHoverThreshold: 90 }")).is_err());
        assert!(parse_config(Some(r#"{"detectHoverThreshold":"high"}"#)).is_err());
    }
}
