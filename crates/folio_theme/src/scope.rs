//! Presentation scope marker
//!
//! One global boolean style flag that every visual consumer keys off, so a
//! scheme change cascades without per-component storage reads. This is the
//! headless analog of toggling a `dark` class on the document root.

use std::sync::atomic::{AtomicBool, Ordering};

/// Receiver of the presentation marker
pub trait StyleScope: Send + Sync {
    /// Reflect the current appearance state into the presentation layer
    fn set_dark(&self, dark: bool);
}

/// Root-level style flag
#[derive(Default)]
pub struct RootScope {
    dark: AtomicBool,
}

impl RootScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the flag
    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::SeqCst)
    }
}

impl StyleScope for RootScope {
    fn set_dark(&self, dark: bool) {
        self.dark.store(dark, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_tracks_last_write() {
        let scope = RootScope::new();
        assert!(!scope.is_dark());

        scope.set_dark(true);
        assert!(scope.is_dark());

        scope.set_dark(false);
        assert!(!scope.is_dark());
    }
}
