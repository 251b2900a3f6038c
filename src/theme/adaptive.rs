//! Light/dark theme pairs selected by color mode.

use crate::controller::ThemeController;
use crate::mode::ColorMode;
use crate::os::SchemeSource;
use crate::store::PreferenceStore;

use super::theme::Theme;

/// A light/dark pair of themes.
///
/// Selection takes an explicit [`ColorMode`] — usually the effective
/// mode published by a
/// [`ThemeController`](crate::ThemeController) — rather than detecting
/// anything itself, so every call site resolves against the same state.
///
/// # Example
///
/// ```rust
/// use duotone::{AdaptiveTheme, ColorMode, Theme};
/// use console::Style;
///
/// let light = Theme::new().add("tone", Style::new().green());
/// let dark = Theme::new().add("tone", Style::new().yellow().italic());
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// let theme = adaptive.select(ColorMode::Dark);
/// assert!(theme.has("tone"));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the variant for the given mode.
    pub fn select(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Returns the variant matching a controller's effective mode.
    pub fn select_for<S, O>(&self, controller: &ThemeController<S, O>) -> &Theme
    where
        S: PreferenceStore,
        O: SchemeSource,
    {
        self.select(controller.effective())
    }
}
