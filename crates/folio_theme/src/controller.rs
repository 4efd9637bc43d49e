//! Theme controller
//!
//! Owns the one authoritative appearance flag for the whole application
//! lifetime: resolves it at startup, persists every transition, reflects it
//! into the presentation scope, and broadcasts it to subscribers.
//!
//! Persistence is best-effort. A store failure downgrades the preference to
//! session-only state; the in-memory flag, the scope marker, and subscriber
//! notification always proceed so the visual toggle never blocks on storage.

use crate::palette::Palette;
use crate::platform::AmbientScheme;
use crate::scheme::ColorScheme;
use crate::scope::StyleScope;
use folio_core::observe::{Subscribers, SubscriptionId};
use folio_store::PreferenceStore;
use std::sync::{Arc, Mutex, RwLock};

/// Storage key for the persisted appearance flag.
///
/// The stored value is the literal string `"true"` or `"false"`.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// The appearance state machine.
///
/// States are [`ColorScheme::Light`] and [`ColorScheme::Dark`]; the only
/// transition is [`toggle`](Self::toggle). Constructed once at startup and
/// shared with consumers as an `Arc`; consumers read and subscribe, never
/// write.
pub struct ThemeController {
    store: Arc<dyn PreferenceStore>,
    scope: Arc<dyn StyleScope>,
    scheme: RwLock<ColorScheme>,
    subscribers: Mutex<Subscribers<ColorScheme>>,
}

impl ThemeController {
    /// Resolve the initial scheme and build the controller.
    ///
    /// Resolution precedence:
    /// 1. a previously saved `"true"`/`"false"` value (a malformed value is
    ///    treated as absent),
    /// 2. the ambient probe,
    /// 3. [`ColorScheme::Light`].
    ///
    /// The resolved scheme is written back to storage and applied to the
    /// scope immediately, so downstream observers see the same side effects
    /// for the initial state as for any later transition.
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        ambient: &dyn AmbientScheme,
        scope: Arc<dyn StyleScope>,
    ) -> Arc<Self> {
        let scheme = resolve_initial(store.as_ref(), ambient);
        tracing::debug!("ThemeController::new - initial scheme {:?}", scheme);

        let controller = Arc::new(Self {
            store,
            scope,
            scheme: RwLock::new(scheme),
            subscribers: Mutex::new(Subscribers::new()),
        });
        controller.apply_side_effects(scheme);
        controller
    }

    /// The live scheme value. Never fails.
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap()
    }

    /// Whether the dark scheme is active. Never fails.
    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    /// The palette for the live scheme
    pub fn palette(&self) -> Palette {
        Palette::for_scheme(self.scheme())
    }

    /// Flip the scheme.
    ///
    /// Persists the new value, updates the presentation scope, and notifies
    /// every subscriber. Never fails: a store error is logged and the
    /// in-memory transition proceeds.
    pub fn toggle(&self) {
        let next = {
            let mut scheme = self.scheme.write().unwrap();
            *scheme = scheme.toggle();
            *scheme
        };
        tracing::debug!("ThemeController::toggle - switching to {:?}", next);

        self.apply_side_effects(next);
        self.subscribers.lock().unwrap().notify(&next);
    }

    /// Register an observer invoked with the new scheme after every toggle
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ColorScheme) + Send + 'static,
    {
        self.subscribers.lock().unwrap().subscribe(callback)
    }

    /// Remove an observer. Idempotent; returns `false` on a repeat removal.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.lock().unwrap().unsubscribe(id)
    }

    fn apply_side_effects(&self, scheme: ColorScheme) {
        let value = if scheme.is_dark() { "true" } else { "false" };
        if let Err(err) = self.store.set(DARK_MODE_KEY, value) {
            // Degrade to session-only persistence, never to a user-visible
            // failure.
            tracing::warn!("could not persist appearance preference: {err}");
        }
        self.scope.set_dark(scheme.is_dark());
    }
}

fn resolve_initial(store: &dyn PreferenceStore, ambient: &dyn AmbientScheme) -> ColorScheme {
    match store.get(DARK_MODE_KEY) {
        Ok(Some(saved)) => match saved.parse::<bool>() {
            Ok(dark) => return ColorScheme::from_dark_flag(dark),
            Err(_) => {
                tracing::warn!("ignoring malformed stored appearance value {saved:?}");
            }
        },
        Ok(None) => {}
        Err(err) => {
            tracing::warn!("preference storage unavailable at startup: {err}");
        }
    }

    ambient.preferred_scheme().unwrap_or(ColorScheme::Light)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::RootScope;
    use folio_store::{MemoryPreferenceStore, StoreError};

    struct FixedAmbient(Option<ColorScheme>);

    impl AmbientScheme for FixedAmbient {
        fn preferred_scheme(&self) -> Option<ColorScheme> {
            self.0
        }
    }

    /// Store whose backing medium is permanently unavailable
    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    fn controller_with(
        store: Arc<dyn PreferenceStore>,
        ambient: Option<ColorScheme>,
    ) -> (Arc<ThemeController>, Arc<RootScope>) {
        let scope = Arc::new(RootScope::new());
        let controller = ThemeController::new(store, &FixedAmbient(ambient), scope.clone());
        (controller, scope)
    }

    #[test]
    fn stored_value_takes_precedence_over_ambient() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set(DARK_MODE_KEY, "true").unwrap();

        let (controller, _) = controller_with(store, Some(ColorScheme::Light));
        assert_eq!(controller.scheme(), ColorScheme::Dark);
    }

    #[test]
    fn stored_false_takes_precedence_over_dark_ambient() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set(DARK_MODE_KEY, "false").unwrap();

        let (controller, _) = controller_with(store, Some(ColorScheme::Dark));
        assert_eq!(controller.scheme(), ColorScheme::Light);
    }

    #[test]
    fn no_stored_value_uses_ambient_preference() {
        let (dark, _) = controller_with(
            Arc::new(MemoryPreferenceStore::new()),
            Some(ColorScheme::Dark),
        );
        assert_eq!(dark.scheme(), ColorScheme::Dark);

        let (light, _) = controller_with(
            Arc::new(MemoryPreferenceStore::new()),
            Some(ColorScheme::Light),
        );
        assert_eq!(light.scheme(), ColorScheme::Light);
    }

    #[test]
    fn ambient_unavailable_defaults_to_light() {
        let (controller, _) = controller_with(Arc::new(MemoryPreferenceStore::new()), None);
        assert_eq!(controller.scheme(), ColorScheme::Light);
    }

    #[test]
    fn malformed_stored_value_behaves_as_absent() {
        for malformed in ["", "yes", "TRUE", "1"] {
            let store = Arc::new(MemoryPreferenceStore::new());
            store.set(DARK_MODE_KEY, malformed).unwrap();

            let (controller, _) = controller_with(store, Some(ColorScheme::Dark));
            assert_eq!(
                controller.scheme(),
                ColorScheme::Dark,
                "value {malformed:?} should fall through to the ambient preference"
            );
        }
    }

    #[test]
    fn initial_resolution_writes_back_and_marks_scope() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let (controller, scope) = controller_with(store.clone(), Some(ColorScheme::Dark));

        assert!(controller.is_dark());
        assert!(scope.is_dark());
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn toggle_parity() {
        let (controller, _) = controller_with(
            Arc::new(MemoryPreferenceStore::new()),
            Some(ColorScheme::Light),
        );
        let initial = controller.scheme();

        for n in 1..=6 {
            controller.toggle();
            let expected = if n % 2 == 0 { initial } else { initial.toggle() };
            assert_eq!(controller.scheme(), expected, "after {n} toggles");
        }
    }

    #[test]
    fn every_toggle_persists_the_string_form() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let (controller, _) = controller_with(store.clone(), Some(ColorScheme::Light));

        controller.toggle();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));

        controller.toggle();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn failing_store_degrades_to_session_only_state() {
        let (controller, scope) = controller_with(Arc::new(FailingStore), Some(ColorScheme::Light));
        assert_eq!(controller.scheme(), ColorScheme::Light);

        let notified = Arc::new(Mutex::new(None));
        let notified_clone = notified.clone();
        controller.subscribe(move |scheme| {
            *notified_clone.lock().unwrap() = Some(*scheme);
        });

        // The visual toggle must not block on persistence.
        controller.toggle();
        assert_eq!(controller.scheme(), ColorScheme::Dark);
        assert!(scope.is_dark());
        assert_eq!(*notified.lock().unwrap(), Some(ColorScheme::Dark));
    }

    #[test]
    fn subscribers_observe_every_transition() {
        let (controller, _) = controller_with(
            Arc::new(MemoryPreferenceStore::new()),
            Some(ColorScheme::Light),
        );

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let id = controller.subscribe(move |scheme| {
            seen_clone.lock().unwrap().push(*scheme);
        });

        controller.toggle();
        controller.toggle();
        assert_eq!(
            *seen.lock().unwrap(),
            vec![ColorScheme::Dark, ColorScheme::Light]
        );

        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));

        controller.toggle();
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn palette_follows_the_live_scheme() {
        let (controller, _) = controller_with(
            Arc::new(MemoryPreferenceStore::new()),
            Some(ColorScheme::Light),
        );
        assert_eq!(controller.palette(), Palette::light());

        controller.toggle();
        assert_eq!(controller.palette(), Palette::dark());
    }
}
