//! End-to-end persistence behavior: an explicit choice made in one session
//! outlives the controller and wins over a changed ambient preference in
//! the next session.

use folio_store::FilePreferenceStore;
use folio_theme::{AmbientScheme, ColorScheme, RootScope, ThemeController};
use std::sync::Arc;

struct FixedAmbient(Option<ColorScheme>);

impl AmbientScheme for FixedAmbient {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        self.0
    }
}

#[test]
fn toggled_choice_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    {
        let store = Arc::new(FilePreferenceStore::new(&path));
        let controller = ThemeController::new(
            store,
            &FixedAmbient(Some(ColorScheme::Light)),
            Arc::new(RootScope::new()),
        );
        assert!(!controller.is_dark());

        controller.toggle();
        assert!(controller.is_dark());
    }

    // New session: the saved choice beats an ambient preference that now
    // disagrees with it.
    let store = Arc::new(FilePreferenceStore::new(&path));
    let controller = ThemeController::new(
        store,
        &FixedAmbient(Some(ColorScheme::Light)),
        Arc::new(RootScope::new()),
    );
    assert!(controller.is_dark());
}

#[test]
fn first_run_resolution_is_persisted_for_later_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    {
        let store = Arc::new(FilePreferenceStore::new(&path));
        let controller = ThemeController::new(
            store,
            &FixedAmbient(Some(ColorScheme::Dark)),
            Arc::new(RootScope::new()),
        );
        assert!(controller.is_dark());
    }

    // The ambient probe is gone in the second session; the written-back
    // initial resolution still restores dark.
    let store = Arc::new(FilePreferenceStore::new(&path));
    let controller =
        ThemeController::new(store, &FixedAmbient(None), Arc::new(RootScope::new()));
    assert!(controller.is_dark());
}
