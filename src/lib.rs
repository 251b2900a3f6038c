//! Light/dark/system theme preference for terminal and desktop apps.
//!
//! `duotone` owns one small piece of state every themed application
//! needs: the user's color-scheme preference. The preference is a
//! tri-state (`light`, `dark`, or `system` meaning "follow the OS"),
//! it survives restarts, and while it is `system` the rendered mode
//! tracks the OS appearance live.
//!
//! The crate provides:
//!
//! - [`ThemeController`]: the preference state machine — loads the
//!   persisted choice, resolves it to an effective [`ColorMode`],
//!   advances through the Light → Dark → System toggle cycle, and
//!   reacts to OS appearance changes
//! - [`PreferenceStore`]: injected persistence capability, with
//!   [`MemoryStore`] and [`FileStore`] implementations
//! - [`SchemeSource`]: injected OS color-scheme capability, with the
//!   `dark-light`-backed [`SystemScheme`] and the scriptable
//!   [`StaticScheme`]
//! - [`Theme`] / [`AdaptiveTheme`]: named `console` style collections
//!   selected by the controller's effective mode
//!
//! # Example
//!
//! ```rust
//! use duotone::{ColorMode, Indicator, MemoryStore, StaticScheme, ThemeController};
//!
//! // In production: ThemeController::start(FileStore::new(path), SystemScheme::new())
//! let mut controller = ThemeController::start(
//!     MemoryStore::new(),
//!     StaticScheme::new(ColorMode::Dark),
//! );
//!
//! // First run follows the OS; the toggle shows the "system" glyph.
//! assert_eq!(controller.effective(), ColorMode::Dark);
//! assert_eq!(controller.indicator(), Indicator::System);
//!
//! // The user clicks the toggle: System -> Light.
//! controller.cycle();
//! assert_eq!(controller.effective(), ColorMode::Light);
//! assert_eq!(controller.indicator(), Indicator::Light);
//! ```

pub mod controller;
pub mod mode;
pub mod os;
pub mod store;
pub mod theme;

pub use controller::ThemeController;
pub use mode::{ColorMode, Indicator, InvalidPreference, Preference};
pub use os::{SchemeSource, StaticScheme, Subscription, SystemScheme};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, PREFERENCE_KEY};
pub use theme::{AdaptiveTheme, Theme};
