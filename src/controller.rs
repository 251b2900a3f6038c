//! The theme preference state machine.
//!
//! [`ThemeController`] owns the persisted preference, the derived
//! effective mode, and the OS-change subscription. All operations are
//! synchronous and expected to run on a single event loop; the effective
//! mode is updated in the same call that changes the preference, so
//! observers never see a stale combination.

use log::{debug, warn};

use crate::mode::{ColorMode, Indicator, Preference};
use crate::os::{SchemeSource, Subscription};
use crate::store::{PreferenceStore, PREFERENCE_KEY};

/// State machine mapping a persisted [`Preference`] to an effective
/// [`ColorMode`], tracking the OS scheme while the preference is
/// `System`.
///
/// Invariants between operations:
///
/// - `effective() == preference().resolve(os preference)`, with the OS
///   preference defaulting to light when the source reports nothing
/// - a subscription is active on the source exactly while the
///   preference is `System` (and the source supports subscriptions)
///
/// # Example
///
/// ```rust
/// use duotone::{ColorMode, MemoryStore, Preference, StaticScheme, ThemeController};
///
/// let mut controller = ThemeController::start(
///     MemoryStore::new(),
///     StaticScheme::new(ColorMode::Dark),
/// );
///
/// // First run: no persisted key, so the preference defaults to
/// // following the OS.
/// assert_eq!(controller.preference(), Preference::System);
/// assert_eq!(controller.effective(), ColorMode::Dark);
///
/// // One step of the toggle cycle leaves automatic mode.
/// assert_eq!(controller.cycle(), ColorMode::Light);
/// assert_eq!(controller.preference(), Preference::Light);
/// ```
pub struct ThemeController<S: PreferenceStore, O: SchemeSource> {
    store: S,
    source: O,
    preference: Preference,
    effective: ColorMode,
    subscription: Option<Subscription>,
}

impl<S: PreferenceStore, O: SchemeSource> ThemeController<S, O> {
    /// Creates a controller without reading the store yet.
    ///
    /// Until [`initialize`](Self::initialize) runs, the controller
    /// behaves as a first run resolved against a light OS.
    pub fn new(store: S, source: O) -> Self {
        Self {
            store,
            source,
            preference: Preference::System,
            effective: ColorMode::Light,
            subscription: None,
        }
    }

    /// Creates and initializes a controller in one step.
    pub fn start(store: S, source: O) -> Self {
        let mut controller = Self::new(store, source);
        controller.initialize();
        controller
    }

    /// Loads the persisted preference and resolves the effective mode.
    ///
    /// An absent or unparseable stored value defaults to `System`; an
    /// unavailable OS preference resolves to light. If the resolved
    /// preference is `System`, this establishes the OS-change
    /// subscription.
    pub fn initialize(&mut self) {
        self.preference = self.stored_preference();
        self.effective = self.preference.resolve(self.os_mode());
        self.sync_subscription();
        debug!(
            "theme initialized: preference {} effective {}",
            self.preference, self.effective
        );
    }

    /// Advances the preference one step through the toggle cycle and
    /// returns the new effective mode.
    ///
    /// The new preference is persisted, the effective mode is
    /// recomputed in the same call, and the OS-change subscription is
    /// established or torn down to match the new state. A failed store
    /// write is logged and otherwise ignored; the in-memory state stays
    /// authoritative for the session.
    pub fn cycle(&mut self) -> ColorMode {
        let next = self.preference.next();
        if let Err(err) = self.store.set(PREFERENCE_KEY, next.as_str()) {
            warn!("theme preference '{next}' not persisted: {err}");
        }
        debug!("theme preference {} -> {next}", self.preference);
        self.preference = next;
        self.effective = next.resolve(self.os_mode());
        self.sync_subscription();
        self.effective
    }

    /// Handles an OS color-scheme change notification.
    ///
    /// The host event loop calls this when the platform signals an
    /// appearance change. It is a no-op unless a subscription is active
    /// and the persisted preference still reads as `System` — the
    /// re-read guards against a notification already queued when a
    /// `cycle` left automatic mode.
    pub fn os_preference_changed(&mut self, new: ColorMode) {
        if self.subscription.is_none() {
            return;
        }
        if self.stored_preference() != Preference::System {
            return;
        }
        debug!("os color scheme changed to {new}");
        self.effective = new;
    }

    /// The current persisted preference.
    pub fn preference(&self) -> Preference {
        self.preference
    }

    /// The mode the rendering layer should use right now.
    pub fn effective(&self) -> ColorMode {
        self.effective
    }

    /// What a toggle control should display for the current state.
    pub fn indicator(&self) -> Indicator {
        Indicator::for_state(self.preference, self.effective)
    }

    /// Whether an OS-change subscription is currently held.
    pub fn is_watching_os(&self) -> bool {
        self.subscription.is_some()
    }

    /// The underlying preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying OS scheme source.
    pub fn source(&self) -> &O {
        &self.source
    }

    /// Releases the OS-change subscription, if any.
    ///
    /// Call when the owning view unmounts. Also runs on drop.
    pub fn release(&mut self) {
        if let Some(sub) = self.subscription.take() {
            self.source.unsubscribe(sub);
        }
    }

    fn stored_preference(&self) -> Preference {
        match self.store.get(PREFERENCE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or(Preference::System),
            Ok(None) => Preference::System,
            Err(err) => {
                warn!("theme preference unreadable, assuming system: {err}");
                Preference::System
            }
        }
    }

    fn os_mode(&self) -> ColorMode {
        self.source.current().unwrap_or(ColorMode::Light)
    }

    fn sync_subscription(&mut self) {
        match self.preference {
            Preference::System => {
                if self.subscription.is_none() {
                    self.subscription = self.source.subscribe();
                }
            }
            _ => self.release(),
        }
    }
}

impl<S: PreferenceStore, O: SchemeSource> Drop for ThemeController<S, O> {
    fn drop(&mut self) {
        self.release();
    }
}
