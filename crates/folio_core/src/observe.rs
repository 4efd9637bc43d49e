//! Observer subscription registry
//!
//! State owners hold a `Subscribers<T>` and broadcast every transition to
//! registered callbacks. Consumers receive the registry's owner by explicit
//! injection (an `Arc` handed down at construction), never through a process
//! global; that keeps the single authoritative value in one place while
//! letting any number of display components observe it.
//!
//! Unsubscribing is idempotent: removing an id that was already removed is a
//! no-op that reports `false`.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier for a registered subscription
    pub struct SubscriptionId;
}

/// A boxed observer callback
pub type Callback<T> = Box<dyn Fn(&T) + Send>;

/// Registry of observer callbacks keyed by [`SubscriptionId`]
pub struct Subscribers<T> {
    callbacks: SlotMap<SubscriptionId, Callback<T>>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
        }
    }

    /// Register a callback; returns the id used to remove it later
    pub fn subscribe<F: Fn(&T) + Send + 'static>(&mut self, callback: F) -> SubscriptionId {
        self.callbacks.insert(Box::new(callback))
    }

    /// Remove a subscription. Returns `false` if the id was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.callbacks.remove(id).is_some()
    }

    /// Invoke every registered callback with the current value
    pub fn notify(&self, value: &T) {
        tracing::trace!(count = self.callbacks.len(), "notifying subscribers");
        for (_, callback) in self.callbacks.iter() {
            callback(value);
        }
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check whether no subscriptions are registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}
