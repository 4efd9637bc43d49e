//! Portfolio application root
//!
//! Builds the theme controller from its injected collaborators and owns the
//! page-level state: section tracking, the project gallery, and the hero
//! animation lifecycle.
//!
//! Scroll events flow through a subscription: the shell calls
//! [`dispatch_scroll`](PortfolioApp::dispatch_scroll) and the section
//! tracker listens while the page is mounted. Teardown removes the listener
//! and cancels the hero timer exactly once; repeating it is a no-op.

use crate::gallery::ProjectGallery;
use crate::hero::HeroSection;
use crate::nav::{SectionSpan, SectionTracker};
use folio_content::{ProjectRecord, ProjectTab, SectionId};
use folio_core::observe::{Subscribers, SubscriptionId};
use folio_store::{FilePreferenceStore, PreferenceStore};
use folio_theme::{AmbientScheme, Palette, RootScope, SystemScheme, ThemeController};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// The headless portfolio application
pub struct PortfolioApp {
    theme: Arc<ThemeController>,
    scope: Arc<RootScope>,
    tracker: Arc<Mutex<SectionTracker>>,
    scroll_events: Subscribers<f32>,
    scroll_subscription: Option<SubscriptionId>,
    gallery: ProjectGallery,
    hero: HeroSection,
}

impl PortfolioApp {
    /// Build the application from explicit collaborators.
    ///
    /// The theme controller resolves its initial state here, so the scope
    /// flag and storage are already in sync when this returns.
    pub fn new(store: Arc<dyn PreferenceStore>, ambient: &dyn AmbientScheme) -> Self {
        let scope = Arc::new(RootScope::new());
        let theme = ThemeController::new(store, ambient, scope.clone());

        Self {
            theme,
            scope,
            tracker: Arc::new(Mutex::new(SectionTracker::new())),
            scroll_events: Subscribers::new(),
            scroll_subscription: None,
            gallery: ProjectGallery::new(),
            hero: HeroSection::new(),
        }
    }

    /// Build the application against the real host environment: a TOML
    /// preference file at `prefs_path` and the system dark-mode probe.
    pub fn open(prefs_path: impl Into<PathBuf>) -> Self {
        let store = Arc::new(FilePreferenceStore::new(prefs_path));
        Self::new(store, &SystemScheme)
    }

    // ========== Theme ==========

    /// Shared handle to the theme controller for consumers that subscribe
    pub fn theme(&self) -> &Arc<ThemeController> {
        &self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// The active palette consumers render from
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// The root presentation flag all visual variants key off
    pub fn scope(&self) -> &Arc<RootScope> {
        &self.scope
    }

    /// Flip the appearance flag (navbar toggle button)
    pub fn toggle_theme(&self) {
        self.theme.toggle();
    }

    // ========== Navigation ==========

    /// Report measured section bounds (after layout or relayout)
    pub fn set_section_spans(&mut self, spans: impl IntoIterator<Item = SectionSpan>) {
        self.tracker.lock().unwrap().set_spans(spans);
    }

    /// Publish a scroll event to the section listener, if one is mounted
    pub fn dispatch_scroll(&self, scroll_offset: f32) {
        self.scroll_events.notify(&scroll_offset);
    }

    /// Navigation click: jump directly to a section
    pub fn select_section(&mut self, id: SectionId) {
        self.tracker.lock().unwrap().select(id);
    }

    pub fn active_section(&self) -> SectionId {
        self.tracker.lock().unwrap().active()
    }

    // ========== Projects ==========

    pub fn project_tabs(&self) -> &'static [ProjectTab] {
        self.gallery.tabs()
    }

    pub fn active_tab(&self) -> ProjectTab {
        self.gallery.active_tab()
    }

    pub fn select_tab(&mut self, tab: ProjectTab) {
        self.gallery.select_tab(tab);
    }

    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        self.gallery.visible_projects()
    }

    // ========== Lifecycle ==========

    /// View appeared: connect the scroll listener and start the hero
    /// animation. A second mount is a no-op.
    pub fn mount(&mut self) {
        if self.scroll_subscription.is_none() {
            let tracker = self.tracker.clone();
            self.scroll_subscription = Some(self.scroll_events.subscribe(move |offset: &f32| {
                tracker.lock().unwrap().on_scroll(*offset);
            }));
        }
        self.hero.mount();
    }

    /// The current typed-text headline
    pub fn hero_headline(&self) -> String {
        self.hero.headline()
    }

    /// View going away: remove the scroll listener and cancel the hero
    /// timer. Each is removed exactly once; repeating is a no-op.
    pub fn teardown(&mut self) {
        if let Some(id) = self.scroll_subscription.take() {
            self.scroll_events.unsubscribe(id);
        }
        self.hero.teardown();
    }
}
