//! Typed-text animation
//!
//! Cycles through a fixed list of strings with a character reveal/retreat
//! effect: one character appears per typing interval until the buffer equals
//! the current string, then one character disappears per (faster) deleting
//! interval until the buffer is empty, at which point the cycle advances to
//! the next string, wrapping forever.
//!
//! Phase flips consume one timer step without changing the buffer, so the
//! full string and the empty buffer each stay visible for exactly one
//! interval.

/// Milliseconds between revealed characters
pub const TYPE_INTERVAL_MS: f32 = 100.0;

/// Milliseconds between removed characters
pub const DELETE_INTERVAL_MS: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// A looping typed-text animation over a fixed string list
#[derive(Clone, Debug)]
pub struct Typewriter {
    texts: Vec<String>,
    text_index: usize,
    shown_chars: usize,
    phase: Phase,
    type_interval_ms: f32,
    delete_interval_ms: f32,
    elapsed_ms: f32,
    playing: bool,
}

impl Typewriter {
    /// Create an animation over `texts` with the default intervals
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts,
            text_index: 0,
            shown_chars: 0,
            phase: Phase::Typing,
            type_interval_ms: TYPE_INTERVAL_MS,
            delete_interval_ms: DELETE_INTERVAL_MS,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Override the typing and deleting intervals
    pub fn with_intervals(mut self, type_ms: f32, delete_ms: f32) -> Self {
        self.type_interval_ms = type_ms;
        self.delete_interval_ms = delete_ms;
        self
    }

    /// Begin (or resume) the cycle
    pub fn start(&mut self) {
        self.playing = true;
    }

    /// Pause the cycle; `tick` becomes a no-op until restarted
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the retreat phase is active
    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    /// The string currently being revealed or retreated
    pub fn current_text(&self) -> &str {
        self.texts
            .get(self.text_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The visible portion of the current string
    pub fn visible(&self) -> &str {
        let current = self.current_text();
        match current.char_indices().nth(self.shown_chars) {
            Some((byte_index, _)) => &current[..byte_index],
            None => current,
        }
    }

    /// Advance by elapsed wall time, performing as many steps as fit.
    ///
    /// The interval for each step is re-evaluated from the phase it starts
    /// in, so a flip from typing to deleting speeds up the remaining steps
    /// of the same tick.
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing || self.texts.is_empty() {
            return;
        }

        self.elapsed_ms += dt_ms;
        loop {
            let interval = match self.phase {
                Phase::Typing => self.type_interval_ms,
                Phase::Deleting => self.delete_interval_ms,
            };
            if self.elapsed_ms < interval {
                break;
            }
            self.elapsed_ms -= interval;
            self.step();
        }
    }

    /// Perform exactly one timer step
    pub fn step(&mut self) {
        if self.texts.is_empty() {
            return;
        }

        let current_len = self.current_text().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown_chars == current_len {
                    self.phase = Phase::Deleting;
                } else {
                    self.shown_chars += 1;
                }
            }
            Phase::Deleting => {
                if self.shown_chars == 0 {
                    self.phase = Phase::Typing;
                    self.text_index = (self.text_index + 1) % self.texts.len();
                } else {
                    self.shown_chars -= 1;
                }
            }
        }
    }
}
