//! Folio Core
//!
//! Foundational primitives shared by the folio crates:
//!
//! - **Color values**: plain RGBA colors with hex construction
//! - **Subscriptions**: a keyed observer registry for broadcasting state
//!   changes to display consumers
//!
//! # Example
//!
//! ```rust
//! use folio_core::observe::Subscribers;
//! use std::sync::{Arc, Mutex};
//!
//! let mut subs = Subscribers::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let seen_clone = seen.clone();
//! let id = subs.subscribe(move |value: &i32| {
//!     seen_clone.lock().unwrap().push(*value);
//! });
//!
//! subs.notify(&7);
//! assert_eq!(*seen.lock().unwrap(), vec![7]);
//!
//! subs.unsubscribe(id);
//! subs.notify(&8);
//! assert_eq!(*seen.lock().unwrap(), vec![7]);
//! ```

pub mod color;
pub mod observe;

pub use color::Color;
pub use observe::{Subscribers, SubscriptionId};
