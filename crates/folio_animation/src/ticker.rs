//! Repeating background ticker
//!
//! Owns the one background activity in the application: a thread that
//! invokes a callback at a fixed period until cancelled. Cancellation joins
//! the thread, so once `cancel()` returns no further callback can run —
//! required for tick targets that are torn down right after.
//!
//! `cancel()` is idempotent and `Drop` cancels, making the ticker a scoped
//! resource: tie it to the owning view and teardown cannot leak a timer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A repeating timer driving a callback on a background thread
pub struct Ticker {
    cancelled: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a ticker invoking `callback` every `period`.
    ///
    /// The first invocation happens one period after spawning.
    pub fn spawn<F>(period: Duration, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();

        let thread = thread::Builder::new()
            .name("folio-ticker".into())
            .spawn(move || loop {
                thread::sleep(period);
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                callback();
            })
            .expect("failed to spawn ticker thread");

        Self {
            cancelled,
            thread: Some(thread),
        }
    }

    /// Whether the ticker has not been cancelled yet
    pub fn is_running(&self) -> bool {
        self.thread.is_some()
    }

    /// Stop the ticker and wait for the thread to exit.
    ///
    /// Blocks for at most one period. Calling it again is a no-op.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(handle) = self.thread.take() {
            tracing::trace!("cancelling ticker");
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
