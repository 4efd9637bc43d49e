//! Folio Animation System
//!
//! Timer-driven animation for the portfolio hero section.
//!
//! # Features
//!
//! - **Typewriter**: a two-phase character reveal/retreat cycle over a
//!   fixed list of strings, advanced by `tick(dt_ms)` so it is fully
//!   testable without real time
//! - **Ticker**: a repeating background timer with deterministic,
//!   idempotent cancellation, used to drive tick-based animations while a
//!   view is mounted

pub mod ticker;
pub mod typewriter;

pub use ticker::Ticker;
pub use typewriter::Typewriter;
