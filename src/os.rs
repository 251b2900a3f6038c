//! OS color-scheme source capability.
//!
//! The controller reads the OS preference and watches it for changes
//! through [`SchemeSource`]. Subscriptions are explicit tokens rather
//! than ambient listeners so their lifetime stays auditable: whoever
//! holds the [`Subscription`] is responsible for handing it back.
//!
//! [`SystemScheme`] is the production source, backed by the `dark-light`
//! crate. [`StaticScheme`] is a scriptable source for tests and headless
//! hosts.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use crate::mode::ColorMode;

/// Opaque handle for an active OS-change subscription.
///
/// Deliberately not `Copy` or `Clone`: it is consumed by
/// [`SchemeSource::unsubscribe`], so a token cannot be released twice.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription(u64);

/// Source of the OS color-scheme preference.
///
/// `current` returns `None` when the host cannot report a preference at
/// all (headless, unsupported desktop); callers fall back to light mode.
/// `subscribe` returns `None` under the same condition.
pub trait SchemeSource {
    /// The OS preference right now, if the host can report one.
    fn current(&self) -> Option<ColorMode>;

    /// Starts change notifications, returning a token to release later.
    fn subscribe(&mut self) -> Option<Subscription>;

    /// Stops the notifications associated with `sub`.
    fn unsubscribe(&mut self, sub: Subscription);
}

/// Production source backed by the `dark-light` crate.
///
/// Detection is a synchronous read. Change delivery is the host event
/// loop's job: platforms signal appearance changes in their own way
/// (a media-query event, a settings daemon signal), and the host
/// forwards them to `ThemeController::os_preference_changed` while
/// [`SystemScheme::is_watched`] reports an active subscription.
#[derive(Debug, Default)]
pub struct SystemScheme {
    next_token: u64,
    active: Vec<u64>,
}

impl SystemScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any subscription is currently active.
    pub fn is_watched(&self) -> bool {
        !self.active.is_empty()
    }

    fn issue(&mut self) -> Subscription {
        let token = self.next_token;
        self.next_token += 1;
        self.active.push(token);
        Subscription(token)
    }
}

impl SchemeSource for SystemScheme {
    fn current(&self) -> Option<ColorMode> {
        match detect_os_theme() {
            OsThemeMode::Dark => Some(ColorMode::Dark),
            OsThemeMode::Light => Some(ColorMode::Light),
        }
    }

    fn subscribe(&mut self) -> Option<Subscription> {
        Some(self.issue())
    }

    fn unsubscribe(&mut self, sub: Subscription) {
        self.active.retain(|&t| t != sub.0);
    }
}

/// Fixed source with a scriptable mode, for tests and headless hosts.
///
/// # Example
///
/// ```rust
/// use duotone::{ColorMode, SchemeSource, StaticScheme};
///
/// let mut scheme = StaticScheme::new(ColorMode::Dark);
/// assert_eq!(scheme.current(), Some(ColorMode::Dark));
///
/// let sub = scheme.subscribe().unwrap();
/// assert_eq!(scheme.subscriber_count(), 1);
/// scheme.unsubscribe(sub);
/// assert_eq!(scheme.subscriber_count(), 0);
///
/// // An unavailable source reports nothing and refuses subscriptions.
/// let mut headless = StaticScheme::unavailable();
/// assert_eq!(headless.current(), None);
/// assert!(headless.subscribe().is_none());
/// ```
#[derive(Debug, Default)]
pub struct StaticScheme {
    mode: Option<ColorMode>,
    next_token: u64,
    active: Vec<u64>,
}

impl StaticScheme {
    /// Creates a source that always reports `mode`.
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    /// Creates a source that cannot report any preference.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Changes the reported mode. Does not notify anyone; pair with a
    /// call to `ThemeController::os_preference_changed` to simulate a
    /// change notification.
    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = Some(mode);
    }

    /// Number of outstanding subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.active.len()
    }
}

impl SchemeSource for StaticScheme {
    fn current(&self) -> Option<ColorMode> {
        self.mode
    }

    fn subscribe(&mut self) -> Option<Subscription> {
        self.mode?;
        let token = self.next_token;
        self.next_token += 1;
        self.active.push(token);
        Some(Subscription(token))
    }

    fn unsubscribe(&mut self, sub: Subscription) {
        self.active.retain(|&t| t != sub.0);
    }
}
