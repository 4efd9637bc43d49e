//! Scroll-driven section tracking
//!
//! Derives the "active section" for navigation highlighting from a scroll
//! offset. The shell reports measured section bounds once (and again on
//! relayout); every scroll event then probes the point
//! `scroll_offset + header_offset` against the spans in list order.

use folio_content::SectionId;
use smallvec::SmallVec;

/// Height of the sticky navigation bar the probe point compensates for
pub const HEADER_OFFSET: f32 = 100.0;

/// Vertical bounds of one tracked section
#[derive(Clone, Copy, Debug)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    pub const fn new(id: SectionId, top: f32, height: f32) -> Self {
        Self { id, top, height }
    }

    fn contains(&self, point: f32) -> bool {
        point >= self.top && point < self.top + self.height
    }
}

/// Tracks which section is active based on scroll position.
///
/// The first span in list order containing the probe point wins; spans are
/// assumed non-overlapping so the tie-break is never exercised in practice.
/// When no span matches (e.g. mid programmatic scroll) the previous active
/// value is kept.
pub struct SectionTracker {
    spans: SmallVec<[SectionSpan; 8]>,
    active: SectionId,
    header_offset: f32,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            spans: SmallVec::new(),
            active: SectionId::Home,
            header_offset: HEADER_OFFSET,
        }
    }

    pub fn with_header_offset(mut self, offset: f32) -> Self {
        self.header_offset = offset;
        self
    }

    /// Replace the tracked spans (called after layout measurement)
    pub fn set_spans(&mut self, spans: impl IntoIterator<Item = SectionSpan>) {
        self.spans = spans.into_iter().collect();
    }

    /// The currently active section
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Directly activate a section (navigation click)
    pub fn select(&mut self, id: SectionId) {
        self.active = id;
    }

    /// Process a scroll event; returns the (possibly unchanged) active section
    pub fn on_scroll(&mut self, scroll_offset: f32) -> SectionId {
        let probe = scroll_offset + self.header_offset;
        for span in &self.spans {
            if span.contains(probe) {
                if span.id != self.active {
                    tracing::trace!("active section -> {}", span.id.id());
                }
                self.active = span.id;
                break;
            }
        }
        self.active
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracked_spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new(SectionId::Home, 0.0, 800.0),
            SectionSpan::new(SectionId::About, 800.0, 600.0),
            SectionSpan::new(SectionId::Projects, 1400.0, 800.0),
            SectionSpan::new(SectionId::Contact, 2200.0, 400.0),
        ]
    }

    #[test]
    fn initial_active_section_is_home() {
        let tracker = SectionTracker::new();
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn scroll_probe_includes_the_header_offset() {
        let mut tracker = SectionTracker::new();
        tracker.set_spans(tracked_spans());

        // 750 + 100 lands inside About even though the raw offset is still
        // within Home's bounds.
        assert_eq!(tracker.on_scroll(750.0), SectionId::About);
    }

    #[test]
    fn each_section_activates_within_its_bounds() {
        let mut tracker = SectionTracker::new();
        tracker.set_spans(tracked_spans());

        assert_eq!(tracker.on_scroll(0.0), SectionId::Home);
        assert_eq!(tracker.on_scroll(900.0), SectionId::About);
        assert_eq!(tracker.on_scroll(1500.0), SectionId::Projects);
        assert_eq!(tracker.on_scroll(2300.0), SectionId::Contact);
    }

    #[test]
    fn no_match_keeps_the_previous_section() {
        let mut tracker = SectionTracker::new();
        tracker.set_spans(tracked_spans());

        tracker.on_scroll(900.0);
        assert_eq!(tracker.active(), SectionId::About);

        // Past the last span: nothing matches, About stays active.
        assert_eq!(tracker.on_scroll(10_000.0), SectionId::About);
    }

    #[test]
    fn first_span_in_list_order_wins_on_overlap() {
        let mut tracker = SectionTracker::new();
        tracker.set_spans(vec![
            SectionSpan::new(SectionId::Home, 0.0, 1000.0),
            SectionSpan::new(SectionId::About, 500.0, 1000.0),
        ]);

        assert_eq!(tracker.on_scroll(600.0), SectionId::Home);
    }

    #[test]
    fn select_activates_directly() {
        let mut tracker = SectionTracker::new();
        tracker.select(SectionId::Resume);
        assert_eq!(tracker.active(), SectionId::Resume);
    }
}
