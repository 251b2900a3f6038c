//! Palette layer: named style collections selected by color mode.
//!
//! This module provides:
//!
//! - [`Theme`]: a named collection of `console` styles with a fluent
//!   builder API
//! - [`AdaptiveTheme`]: a light/dark theme pair selected by an explicit
//!   [`ColorMode`](crate::ColorMode), typically the controller's
//!   effective mode
//!
//! Selection is always driven by a mode the caller supplies; this layer
//! never detects anything itself.

mod adaptive;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::AdaptiveTheme;
pub use theme::Theme;
