//! Folio Theme System
//!
//! Appearance state for the portfolio application: a light/dark color
//! scheme, the palette each scheme resolves to, detection of the host
//! environment's ambient preference, and the controller that owns the one
//! authoritative appearance flag.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Color scheme**: the two-state light/dark flag and its palette
//! - **Ambient detection**: a read-only probe of the host's system-wide
//!   dark-mode preference, consulted only when no saved choice exists
//! - **Persistence**: the current scheme is written to durable storage on
//!   every transition, so an explicit choice survives restarts
//! - **Broadcast**: consumers subscribe once and observe every transition;
//!   nothing polls storage
//!
//! # Quick Start
//!
//! ```rust
//! use folio_store::MemoryPreferenceStore;
//! use folio_theme::{RootScope, SystemScheme, ThemeController};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryPreferenceStore::new());
//! let scope = Arc::new(RootScope::new());
//! let theme = ThemeController::new(store, &SystemScheme, scope.clone());
//!
//! let _accent = theme.palette().accent;
//! theme.toggle();
//! assert_eq!(scope.is_dark(), theme.is_dark());
//! ```
//!
//! # Architecture
//!
//! `ThemeController` is an explicitly injected object: the application
//! constructs exactly one and hands an `Arc` to every consumer. There is no
//! process-global instance; ownership of the appearance flag stays with the
//! controller and consumers only ever read it or call `toggle()`.

pub mod controller;
pub mod palette;
pub mod platform;
pub mod scheme;
pub mod scope;

pub use controller::{ThemeController, DARK_MODE_KEY};
pub use palette::Palette;
pub use platform::{detect_system_color_scheme, AmbientScheme, SystemScheme};
pub use scheme::ColorScheme;
pub use scope::{RootScope, StyleScope};
