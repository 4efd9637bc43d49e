//! Hero section lifecycle
//!
//! Owns the typed-text animation and the ticker that drives it. The ticker
//! exists only while the section is mounted; `teardown` cancels it before
//! the animation state is released, so no tick can land on a dismantled
//! view. Both `mount` and `teardown` are idempotent.

use folio_animation::{Ticker, Typewriter};
use folio_content::HERO_TEXTS;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Period of the ticker driving the typewriter
pub const TICK_PERIOD: Duration = Duration::from_millis(25);

/// The hero section's animated headline
pub struct HeroSection {
    typewriter: Arc<Mutex<Typewriter>>,
    ticker: Option<Ticker>,
}

impl HeroSection {
    pub fn new() -> Self {
        let texts = HERO_TEXTS.iter().map(|s| s.to_string()).collect();
        Self {
            typewriter: Arc::new(Mutex::new(Typewriter::new(texts))),
            ticker: None,
        }
    }

    /// Start the headline animation. A second mount is a no-op.
    pub fn mount(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        self.typewriter.lock().unwrap().start();

        let typewriter = self.typewriter.clone();
        let period_ms = TICK_PERIOD.as_secs_f32() * 1000.0;
        self.ticker = Some(Ticker::spawn(TICK_PERIOD, move || {
            typewriter.lock().unwrap().tick(period_ms);
        }));
        tracing::debug!("hero mounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.ticker.is_some()
    }

    /// The currently visible portion of the rotating headline
    pub fn headline(&self) -> String {
        self.typewriter.lock().unwrap().visible().to_string()
    }

    /// Stop the animation and release the timer.
    ///
    /// After this returns no further tick runs. Calling it again, or never
    /// having mounted, is a no-op.
    pub fn teardown(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
            tracing::debug!("hero torn down");
        }
        self.typewriter.lock().unwrap().stop();
    }
}

impl Default for HeroSection {
    fn default() -> Self {
        Self::new()
    }
}
