// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw environment facts and their translation into input signals.

use bolts::InputSignals;

/// Media query matched by devices whose primary input can hover.
pub const HOVER_MEDIA_QUERY: &str = "(hover: hover)";

/// What the browser reports about its input devices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvironmentProbe {
    /// `"onmousemove" in window`.
    pub has_mousemove: bool,
    /// `"ontouchstart" in window`.
    pub has_touchstart: bool,
    /// [`HOVER_MEDIA_QUERY`] matches.
    pub hover_media: bool,
    /// `navigator.userAgent`.
    pub user_agent: String,
}

impl EnvironmentProbe {
    /// Folds the probe into the signals the hover detector consumes.
    #[must_use]
    pub fn signals(&self) -> InputSignals {
        let mut signals = InputSignals::empty();
        signals.set(InputSignals::MOUSEMOVE, self.has_mousemove);
        signals.set(InputSignals::TOUCHSTART, self.has_touchstart);
        signals.set(InputSignals::HOVER_MEDIA, self.hover_media);
        signals.set(
            InputSignals::MOBILE_AGENT,
            is_mobile_user_agent(&self.user_agent),
        );
        signals
    }
}

/// Returns `true` for user agents of phones and tablets that emulate
/// `mouseover` on touch.
#[must_use]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    user_agent.contains("Mobile")
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

    #[test]
    fn mobile_agents() {
        assert!(is_mobile_user_agent(IPHONE));
        assert!(!is_mobile_user_agent(DESKTOP));
        assert!(!is_mobile_user_agent(""));
    }

    #[test]
    fn probe_folds_into_signals() {
        let desktop = EnvironmentProbe {
            has_mousemove: true,
            has_touchstart: false,
            hover_media: true,
            user_agent: DESKTOP.into(),
        };
        assert_eq!(
            desktop.signals(),
            InputSignals::MOUSEMOVE | InputSignals::HOVER_MEDIA
        );

        let phone = EnvironmentProbe {
            has_mousemove: true,
            has_touchstart: true,
            hover_media: false,
            user_agent: IPHONE.into(),
        };
        assert_eq!(
            phone.signals(),
            InputSignals::MOUSEMOVE | InputSignals::TOUCHSTART | InputSignals::MOBILE_AGENT
        );
    }
}
