//! Pointer-drag scrolling for the horizontal project strip.
//!
//! ```text
//!   Idle ──start──▶ Dragging ──move──▶ Dragging
//!    ▲                  │
//!    └──────end─────────┘   (snap to nearest card)
//! ```
//!
//! Malformed sequences (move or end without a start) are ignored.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domain::settings::DragSettings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    pub scroll_offset: f64,
    pub is_dragging: bool,
    pub drag_start_x: f64,
    pub baseline_scroll_offset: f64,
}

/// Measured geometry of the card strip at gesture end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub card_width: f64,
    pub gap: f64,
    pub card_count: usize,
}

impl CardLayout {
    /// Distance between the left edges of neighbouring cards.
    pub fn step(&self) -> f64 {
        self.card_width + self.gap
    }

    pub fn track_length(&self) -> f64 {
        self.step() * self.card_count as f64
    }
}

/// Where the strip settles after a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    pub index: usize,
    pub offset: f64,
}

#[derive(Debug, Clone)]
pub struct DragScrollCarousel {
    state: CarouselState,
    amplification: f64,
    hint_visible: bool,
}

impl DragScrollCarousel {
    pub fn new(settings: &DragSettings) -> Self {
        Self {
            state: CarouselState::default(),
            amplification: settings.amplification,
            hint_visible: true,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Hide the onboarding hint. Returns `true` if it was showing.
    pub fn dismiss_hint(&mut self) -> bool {
        std::mem::replace(&mut self.hint_visible, false)
    }

    /// The host scrolled the strip by other means (wheel, keyboard, snap).
    pub fn sync_scroll(&mut self, offset: f64) {
        if !self.state.is_dragging {
            self.state.scroll_offset = offset;
        }
    }

    pub fn start(&mut self, pointer_x: f64, container_left: f64) {
        self.dismiss_hint();
        self.state.is_dragging = true;
        self.state.drag_start_x = pointer_x - container_left;
        self.state.baseline_scroll_offset = self.state.scroll_offset;
        debug!(
            start_x = self.state.drag_start_x,
            baseline = self.state.baseline_scroll_offset,
            "Drag started"
        );
    }

    /// Follow the pointer. Returns the new scroll offset, or `None` when no
    /// drag is active.
    pub fn drag_to(&mut self, pointer_x: f64, container_left: f64) -> Option<f64> {
        if !self.state.is_dragging {
            trace!("Ignoring move without an active drag");
            return None;
        }

        let delta = (pointer_x - container_left) - self.state.drag_start_x;
        let offset = self.state.baseline_scroll_offset - delta * self.amplification;
        // Scroll containers cannot go left of their origin.
        self.state.scroll_offset = offset.max(0.0);
        Some(self.state.scroll_offset)
    }

    /// Finish the drag and snap to the nearest card boundary.
    pub fn end(&mut self, layout: &CardLayout) -> Option<SnapTarget> {
        if !self.state.is_dragging {
            trace!("Ignoring end without an active drag");
            return None;
        }
        self.state.is_dragging = false;

        let step = layout.step();
        if layout.card_count == 0 || !(step > 0.0) {
            return None;
        }

        let nearest = (self.state.scroll_offset / step).round().max(0.0) as usize;
        let index = nearest.min(layout.card_count - 1);
        let offset = index as f64 * step;
        self.state.scroll_offset = offset;

        debug!(index, offset, "Drag settled");
        Some(SnapTarget { index, offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> DragScrollCarousel {
        DragScrollCarousel::new(&DragSettings::default())
    }

    fn layout(card_count: usize) -> CardLayout {
        CardLayout {
            card_width: 300.0,
            gap: 32.0,
            card_count,
        }
    }

    #[test]
    fn snaps_to_nearest_card() {
        let mut c = carousel();
        c.sync_scroll(500.0);
        c.start(0.0, 0.0);
        let snap = c.end(&layout(6)).unwrap();
        assert_eq!(snap.index, 2);
        assert_eq!(snap.offset, 664.0);
        assert_eq!(c.state().scroll_offset, 664.0);
    }

    #[test]
    fn move_applies_amplified_delta_against_baseline() {
        let mut c = carousel();
        c.sync_scroll(400.0);
        c.start(250.0, 50.0);
        // pointer travels 100 right => strip scrolls 120 left
        assert_eq!(c.drag_to(350.0, 50.0), Some(280.0));
        // travel is always measured from the start, not the previous move
        assert_eq!(c.drag_to(150.0, 50.0), Some(520.0));
    }

    #[test]
    fn move_before_start_is_ignored() {
        let mut c = carousel();
        assert_eq!(c.drag_to(100.0, 0.0), None);
        assert_eq!(c.state().scroll_offset, 0.0);
    }

    #[test]
    fn end_without_start_and_duplicate_end_are_noops() {
        let mut c = carousel();
        assert!(c.end(&layout(3)).is_none());

        c.start(0.0, 0.0);
        assert!(c.end(&layout(3)).is_some());
        assert!(c.end(&layout(3)).is_none());
    }

    #[test]
    fn snap_index_stays_inside_track() {
        let l = layout(4);
        for offset in [0.0, 10.0, 165.0, 166.0, 995.0, 1_400.0, 9_000.0] {
            let mut c = carousel();
            c.sync_scroll(offset);
            c.start(0.0, 0.0);
            let snap = c.end(&l).unwrap();
            let upper = (l.track_length() / l.step()).floor() as usize;
            assert!(snap.index < upper, "offset {offset} gave {}", snap.index);
        }
    }

    #[test]
    fn dragging_past_origin_clamps_to_zero() {
        let mut c = carousel();
        c.start(0.0, 0.0);
        assert_eq!(c.drag_to(500.0, 0.0), Some(0.0));
    }

    #[test]
    fn first_start_dismisses_hint() {
        let mut c = carousel();
        assert!(c.hint_visible());
        c.start(0.0, 0.0);
        assert!(!c.hint_visible());
        assert!(!c.dismiss_hint());
    }

    #[test]
    fn host_scroll_is_ignored_mid_drag() {
        let mut c = carousel();
        c.start(0.0, 0.0);
        c.sync_scroll(999.0);
        assert_eq!(c.state().scroll_offset, 0.0);
    }
}
