//! Folio Preference Store
//!
//! Durable string key-value storage surviving process restarts, plus an
//! in-memory variant for session-only operation and tests.
//!
//! The store is deliberately tiny: the application persists a single
//! preference (the appearance flag), so the contract is `get`/`set` over
//! string keys and values. Implementations report failures through
//! [`StoreError`]; callers decide whether a failure is fatal (for the theme
//! machine it never is — it degrades to session-only state).
//!
//! # Example
//!
//! ```rust
//! use folio_store::{MemoryPreferenceStore, PreferenceStore};
//!
//! let store = MemoryPreferenceStore::new();
//! store.set("dark_mode", "true").unwrap();
//! assert_eq!(store.get("dark_mode").unwrap().as_deref(), Some("true"));
//! ```

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FilePreferenceStore;
pub use memory::MemoryPreferenceStore;

/// Durable string key-value storage.
///
/// Implementations must be shareable across threads; the theme controller
/// holds its store behind an `Arc<dyn PreferenceStore>`.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing was saved.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Durably store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
