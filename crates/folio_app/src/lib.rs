//! Folio Application
//!
//! Headless composition of the portfolio's state layer: the theme
//! controller wired to durable storage and the host's ambient preference,
//! scroll-driven section tracking, the filterable project gallery, and the
//! hero typed-text animation with a mount/teardown lifecycle.
//!
//! # Example
//!
//! ```rust
//! use folio_app::prelude::*;
//! use folio_store::MemoryPreferenceStore;
//! use folio_theme::{AmbientScheme, ColorScheme};
//! use std::sync::Arc;
//!
//! struct NoAmbient;
//! impl AmbientScheme for NoAmbient {
//!     fn preferred_scheme(&self) -> Option<ColorScheme> {
//!         None
//!     }
//! }
//!
//! let mut app = PortfolioApp::new(Arc::new(MemoryPreferenceStore::new()), &NoAmbient);
//! assert!(!app.is_dark());
//!
//! app.toggle_theme();
//! assert!(app.is_dark());
//!
//! app.teardown();
//! ```

pub mod app;
pub mod gallery;
pub mod hero;
pub mod nav;

pub use app::PortfolioApp;
pub use gallery::ProjectGallery;
pub use hero::HeroSection;
pub use nav::{SectionSpan, SectionTracker, HEADER_OFFSET};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::PortfolioApp;
    pub use crate::gallery::ProjectGallery;
    pub use crate::hero::HeroSection;
    pub use crate::nav::{SectionSpan, SectionTracker, HEADER_OFFSET};

    pub use folio_content::{ProjectCategory, ProjectTab, SectionId};
    pub use folio_theme::{ColorScheme, Palette};
}
