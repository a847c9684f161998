//! Philosophy ticker.
//!
//! The section is pinned while the reader scrolls; vertical scroll through
//! the pin maps to horizontal translation of the track. Scroll velocity skews
//! the track, items animate in as they cross a horizontal threshold, and the
//! highlighted word changes color past a progress threshold.

use crate::error::MotionResult;
use crate::motion::{
    clamp01, ElementMetrics, Ease, SkewFollower, Timeline, TimelineBuilder, TriggerEdge, VisualState,
};

pub const SECTION_ID: &str = "philosophy";
pub const TRACK_ID: &str = "philosophy-track";

/// Items enter once their left edge passes 85% of the viewport width.
pub const ITEM_THRESHOLD: f64 = 0.85;

/// Progress at which the highlighted item switches color.
pub const HIGHLIGHT_PROGRESS: f64 = 0.55;

pub const HIGHLIGHT_CLASS: &str = "is-lit";

pub fn item_id(index: usize) -> String {
    format!("philosophy-item-{index}")
}

/// Measured layout of the pinned ticker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickerLayout {
    /// Full scroll width of the track, px
    pub track_width: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl TickerLayout {
    /// Vertical scroll consumed by the pin, equal to the horizontal overflow.
    pub fn scroll_distance(&self) -> f64 {
        (self.track_width - self.viewport_width).max(0.0)
    }

    /// Height the section needs so its sticky frame stays pinned for the
    /// whole horizontal run.
    pub fn pin_height(&self) -> f64 {
        self.viewport_height + self.scroll_distance()
    }

    /// Progress through the pin given the section's top relative to the
    /// viewport.
    pub fn progress(&self, section_top: f64) -> f64 {
        let distance = self.scroll_distance();
        if distance == 0.0 {
            return if section_top <= 0.0 { 1.0 } else { 0.0 };
        }
        clamp01(-section_top / distance)
    }

    /// Horizontal translation of the track, px (zero or negative).
    pub fn translate_x(&self, progress: f64) -> f64 {
        -clamp01(progress) * self.scroll_distance()
    }

    /// Horizontal geometry of an item expressed as scroll metrics, so the
    /// usual toggle trigger can watch it cross [`ITEM_THRESHOLD`].
    ///
    /// Until the section reaches the pin (`section_top > 0`) every item is
    /// reported at or past the right edge of the viewport, so nothing enters
    /// before the track starts moving.
    pub fn item_metrics(
        &self,
        item_left: f64,
        item_width: f64,
        translate_x: f64,
        section_top: f64,
    ) -> ElementMetrics {
        let left = item_left + translate_x;
        ElementMetrics {
            top: if section_top > 0.0 { left.max(self.viewport_width) } else { left },
            height: item_width,
            viewport_height: self.viewport_width,
        }
    }
}

pub fn item_trigger() -> TriggerEdge {
    TriggerEdge::new(0.0, ITEM_THRESHOLD)
}

pub fn item_entrance(item_id: &str) -> MotionResult<Timeline> {
    TimelineBuilder::new()
        .to(
            item_id,
            VisualState::rest().with_y(80.0).with_rotate(6.0).with_opacity(0.0),
            VisualState::rest(),
            0.8,
            Ease::Power3Out,
        )
        .build()
}

pub fn highlight_active(progress: f64) -> bool {
    progress >= HIGHLIGHT_PROGRESS
}

/// Skew tracker for the track: 250 px/s per degree, at most 10 degrees.
pub fn skew_follower() -> SkewFollower {
    SkewFollower::new(250.0, 10.0, 0.12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{ScrollReveal, ToggleAction};

    fn layout() -> TickerLayout {
        TickerLayout {
            track_width: 3000.0,
            viewport_width: 1000.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn pin_consumes_horizontal_overflow() {
        let layout = layout();
        assert_eq!(layout.scroll_distance(), 2000.0);
        assert_eq!(layout.pin_height(), 2800.0);
    }

    #[test]
    fn progress_maps_to_translation() {
        let layout = layout();
        assert_eq!(layout.progress(200.0), 0.0);
        assert_eq!(layout.progress(-1000.0), 0.5);
        assert_eq!(layout.translate_x(0.5), -1000.0);
        assert_eq!(layout.progress(-5000.0), 1.0);
        assert_eq!(layout.translate_x(1.0), -2000.0);
    }

    #[test]
    fn narrow_track_does_not_pin() {
        let layout = TickerLayout {
            track_width: 500.0,
            ..layout()
        };
        assert_eq!(layout.scroll_distance(), 0.0);
        assert_eq!(layout.translate_x(0.7), 0.0);
        assert_eq!(layout.progress(10.0), 0.0);
    }

    #[test]
    fn item_crosses_threshold_as_track_moves() {
        let layout = layout();
        let trigger = item_trigger();
        let far = layout.item_metrics(1500.0, 200.0, 0.0, 0.0);
        assert!(!trigger.is_crossed(far));
        let moved = layout.item_metrics(1500.0, 200.0, -700.0, -700.0);
        assert!(trigger.is_crossed(moved));
    }

    #[test]
    fn leading_item_waits_for_the_pin() {
        let layout = TickerLayout {
            track_width: 4000.0,
            viewport_width: 1400.0,
            viewport_height: 900.0,
        };
        let mut reveal = ScrollReveal::new(item_trigger(), item_entrance("lead").unwrap());

        // Section still far below the fold: nothing moves yet.
        let idle = layout.translate_x(layout.progress(3000.0));
        let offscreen = layout.item_metrics(40.0, 200.0, idle, 3000.0);
        assert_eq!(reveal.update(offscreen, 16.0).action, None);
        let approaching = layout.item_metrics(40.0, 200.0, 0.0, 400.0);
        assert_eq!(reveal.update(approaching, 16.0).action, None);

        let start = layout.translate_x(layout.progress(0.0));
        let pinned = layout.item_metrics(40.0, 200.0, start, 0.0);
        assert_eq!(reveal.update(pinned, 16.0).action, Some(ToggleAction::Enter));
    }

    #[test]
    fn highlight_threshold() {
        assert!(!highlight_active(0.5));
        assert!(highlight_active(HIGHLIGHT_PROGRESS));
    }
}
