//! Scroll position to progress mapping.
//!
//! Positions are expressed the way the layout reports them: an element's
//! top relative to the viewport top (negative once scrolled past), its
//! height, and the viewport height. Scrolling down by `d` pixels lowers
//! `top` by `d`.

use crate::error::{MotionError, MotionResult};

use super::clamp01;

/// Snapshot of an element's geometry relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementMetrics {
    /// Element top relative to viewport top, px
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

/// A point on the element meeting a point on the viewport.
///
/// `element` and `viewport` are fractions of their respective heights:
/// `TriggerEdge::new(0.0, 0.8)` fires when the element's top reaches 80%
/// down the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerEdge {
    pub element: f64,
    pub viewport: f64,
}

impl TriggerEdge {
    /// Element top meets viewport bottom
    pub const TOP_BOTTOM: TriggerEdge = TriggerEdge::new(0.0, 1.0);
    /// Element top meets viewport top
    pub const TOP_TOP: TriggerEdge = TriggerEdge::new(0.0, 0.0);
    /// Element bottom meets viewport top
    pub const BOTTOM_TOP: TriggerEdge = TriggerEdge::new(1.0, 0.0);

    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Remaining scroll (px) before this edge is reached. Zero or negative
    /// once crossed.
    pub fn distance(&self, metrics: ElementMetrics) -> f64 {
        metrics.top + self.element * metrics.height - self.viewport * metrics.viewport_height
    }

    pub fn is_crossed(&self, metrics: ElementMetrics) -> bool {
        self.distance(metrics) <= 0.0
    }
}

/// A scroll-linked span between two edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: TriggerEdge,
    pub end: TriggerEdge,
}

impl ScrollRange {
    pub const fn new(start: TriggerEdge, end: TriggerEdge) -> Self {
        Self { start, end }
    }

    /// Scroll distance (px) between start and end for this geometry.
    pub fn span(&self, metrics: ElementMetrics) -> MotionResult<f64> {
        let span = self.end.distance(metrics) - self.start.distance(metrics);
        if span > 0.0 && span.is_finite() {
            Ok(span)
        } else {
            Err(MotionError::DegenerateScrollRange { span })
        }
    }

    /// Progress through the range in [0, 1].
    ///
    /// A degenerate range (zero or negative span) behaves as a step at its
    /// start edge.
    pub fn progress(&self, metrics: ElementMetrics) -> f64 {
        let start = self.start.distance(metrics);
        match self.span(metrics) {
            Ok(span) => clamp01(-start / span),
            Err(_) => {
                if start <= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Action emitted when a toggle trigger changes side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Scrolled forward past the edge
    Enter,
    /// Scrolled back above the edge
    LeaveBack,
}

/// Fires once per crossing of a single edge, in either direction.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleTrigger {
    edge: TriggerEdge,
    active: bool,
}

impl ToggleTrigger {
    pub fn new(edge: TriggerEdge) -> Self {
        Self {
            edge,
            active: false,
        }
    }

    pub fn edge(&self) -> TriggerEdge {
        self.edge
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed new geometry; returns an action only when the side changes.
    pub fn update(&mut self, metrics: ElementMetrics) -> Option<ToggleAction> {
        let crossed = self.edge.is_crossed(metrics);
        match (self.active, crossed) {
            (false, true) => {
                self.active = true;
                Some(ToggleAction::Enter)
            }
            (true, false) => {
                self.active = false;
                Some(ToggleAction::LeaveBack)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(top: f64) -> ElementMetrics {
        ElementMetrics {
            top,
            height: 400.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn edge_distance() {
        let edge = TriggerEdge::new(0.0, 0.8);
        assert_eq!(edge.distance(at(900.0)), 100.0);
        assert!(!edge.is_crossed(at(900.0)));
        assert!(edge.is_crossed(at(800.0)));
    }

    #[test]
    fn range_progress_top_to_bottom() {
        let range = ScrollRange::new(TriggerEdge::TOP_TOP, TriggerEdge::BOTTOM_TOP);
        assert_eq!(range.progress(at(100.0)), 0.0);
        assert_eq!(range.progress(at(0.0)), 0.0);
        assert_eq!(range.progress(at(-200.0)), 0.5);
        assert_eq!(range.progress(at(-400.0)), 1.0);
        assert_eq!(range.progress(at(-4000.0)), 1.0);
    }

    #[test]
    fn degenerate_range_is_a_step() {
        let range = ScrollRange::new(TriggerEdge::TOP_TOP, TriggerEdge::TOP_TOP);
        assert!(range.span(at(0.0)).is_err());
        assert_eq!(range.progress(at(10.0)), 0.0);
        assert_eq!(range.progress(at(-10.0)), 1.0);
    }

    #[test]
    fn toggle_fires_once_per_crossing() {
        let mut trigger = ToggleTrigger::new(TriggerEdge::new(0.0, 0.8));
        assert_eq!(trigger.update(at(900.0)), None);
        assert_eq!(trigger.update(at(700.0)), Some(ToggleAction::Enter));
        assert_eq!(trigger.update(at(500.0)), None);
        assert_eq!(trigger.update(at(850.0)), Some(ToggleAction::LeaveBack));
        assert_eq!(trigger.update(at(950.0)), None);
        assert!(!trigger.is_active());
    }

    #[test]
    fn already_in_view_enters_on_first_update() {
        let mut trigger = ToggleTrigger::new(TriggerEdge::new(0.0, 0.8));
        assert_eq!(trigger.update(at(0.0)), Some(ToggleAction::Enter));
    }
}
