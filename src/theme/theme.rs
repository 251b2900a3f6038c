//! Theme struct for building style collections.

use std::collections::HashMap;

use console::Style;

/// A named collection of styles for one color mode.
///
/// # Example
///
/// ```rust
/// use duotone::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("muted", Style::new().dim())
///     .add("accent", Style::new().cyan().bold());
///
/// assert!(theme.has("accent"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Looks up a style by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Whether a style with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Whether the theme contains no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Number of named styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }
}
