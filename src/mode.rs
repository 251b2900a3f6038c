//! Core color-mode and preference enums.
//!
//! This module provides:
//!
//! - [`ColorMode`]: the effective (rendered) light or dark mode
//! - [`Preference`]: the persisted user choice, including `System`
//! - [`Indicator`]: what a toggle control should display
//!
//! `ColorMode` is never persisted; it is always derived from a
//! [`Preference`] and the OS preference via [`Preference::resolve`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The effective color mode actually used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => f.write_str("light"),
            ColorMode::Dark => f.write_str("dark"),
        }
    }
}

/// The user's persisted theme preference.
///
/// `System` means "follow the OS color scheme". The preference cycles
/// through all three states via [`Preference::next`]; there is no
/// terminal state.
///
/// # Example
///
/// ```rust
/// use duotone::Preference;
///
/// let p = Preference::Light;
/// assert_eq!(p.next(), Preference::Dark);
/// assert_eq!(p.next().next(), Preference::System);
/// assert_eq!(p.next().next().next(), Preference::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Light,
    Dark,
    System,
}

impl Preference {
    /// The string form used in the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Light => "light",
            Preference::Dark => "dark",
            Preference::System => "system",
        }
    }

    /// The next preference in the toggle cycle.
    ///
    /// The order is Light → Dark → System → Light. This matches the
    /// shipped toggle behavior; changing it would reorder every user's
    /// muscle memory, so don't.
    pub fn next(&self) -> Preference {
        match self {
            Preference::Light => Preference::Dark,
            Preference::Dark => Preference::System,
            Preference::System => Preference::Light,
        }
    }

    /// Resolves this preference to an effective mode.
    ///
    /// `System` follows `os`; fixed preferences ignore it.
    pub fn resolve(&self, os: ColorMode) -> ColorMode {
        match self {
            Preference::Light => ColorMode::Light,
            Preference::Dark => ColorMode::Dark,
            Preference::System => os,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized preference string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme preference '{0}'")]
pub struct InvalidPreference(pub String);

impl FromStr for Preference {
    type Err = InvalidPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Preference::Light),
            "dark" => Ok(Preference::Dark),
            "system" => Ok(Preference::System),
            other => Err(InvalidPreference(other.to_string())),
        }
    }
}

/// The glyph a theme-toggle control should show.
///
/// When the preference is `System`, the indicator is `System` no matter
/// which mode the OS resolved to: the control reflects the *mode* the
/// user chose, not the resulting color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Light,
    Dark,
    System,
}

impl Indicator {
    /// Computes the indicator for a preference and its resolved mode.
    pub fn for_state(preference: Preference, effective: ColorMode) -> Indicator {
        match preference {
            Preference::System => Indicator::System,
            _ => match effective {
                ColorMode::Light => Indicator::Light,
                ColorMode::Dark => Indicator::Dark,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(Preference::Light.next(), Preference::Dark);
        assert_eq!(Preference::Dark.next(), Preference::System);
        assert_eq!(Preference::System.next(), Preference::Light);
    }

    #[test]
    fn test_cycle_returns_after_three() {
        for start in [Preference::Light, Preference::Dark, Preference::System] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn test_resolve_fixed_preferences_ignore_os() {
        for os in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(Preference::Light.resolve(os), ColorMode::Light);
            assert_eq!(Preference::Dark.resolve(os), ColorMode::Dark);
        }
    }

    #[test]
    fn test_resolve_system_follows_os() {
        assert_eq!(Preference::System.resolve(ColorMode::Light), ColorMode::Light);
        assert_eq!(Preference::System.resolve(ColorMode::Dark), ColorMode::Dark);
    }

    #[test]
    fn test_string_round_trip() {
        for p in [Preference::Light, Preference::Dark, Preference::System] {
            assert_eq!(p.as_str().parse::<Preference>().unwrap(), p);
        }
    }

    #[test]
    fn test_parse_unknown_string() {
        let err = "solarized".parse::<Preference>().unwrap_err();
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn test_serde_uses_lowercase_literals() {
        assert_eq!(
            serde_json::to_string(&Preference::System).unwrap(),
            "\"system\""
        );
        assert_eq!(
            serde_json::from_str::<ColorMode>("\"dark\"").unwrap(),
            ColorMode::Dark
        );
    }

    #[test]
    fn test_indicator_reflects_mode_not_color() {
        assert_eq!(
            Indicator::for_state(Preference::System, ColorMode::Dark),
            Indicator::System
        );
        assert_eq!(
            Indicator::for_state(Preference::System, ColorMode::Light),
            Indicator::System
        );
        assert_eq!(
            Indicator::for_state(Preference::Dark, ColorMode::Dark),
            Indicator::Dark
        );
        assert_eq!(
            Indicator::for_state(Preference::Light, ColorMode::Light),
            Indicator::Light
        );
    }
}
