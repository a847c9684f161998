//! Custom cursor state.
//!
//! A dot snaps to the raw pointer every frame; a ring trails it with
//! exponential smoothing. Hovering an interactive element hides the dot and
//! grows the ring, which switches to a difference blend.

use crate::error::MotionResult;
use crate::motion::{Follower, Vec2};

/// Selector matching everything the cursor treats as interactive.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, select, [data-cursor=\"hover\"]";

/// Attribute (and value) that opts an arbitrary element into hover styling.
pub const HOVER_ATTRIBUTE: (&str, &str) = ("data-cursor", "hover");

const INTERACTIVE_TAGS: [&str; 5] = ["a", "button", "input", "textarea", "select"];

/// Ring scale while hovering an interactive element.
pub const RING_HOVER_SCALE: f64 = 2.5;

/// Primary input device, as reported by the `(pointer: fine)` media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse or trackpad
    Fine,
    /// Touch
    Coarse,
}

impl PointerKind {
    pub fn from_fine_match(fine: bool) -> Self {
        if fine {
            PointerKind::Fine
        } else {
            PointerKind::Coarse
        }
    }

    /// The custom cursor only exists for fine pointers.
    pub fn tracks_cursor(&self) -> bool {
        matches!(self, PointerKind::Fine)
    }
}

/// Whether an element with this tag name (any case) and hover flag counts
/// as interactive.
pub fn is_interactive(tag_name: &str, hover_flag: bool) -> bool {
    hover_flag
        || INTERACTIVE_TAGS
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Normal,
    Difference,
}

impl BlendMode {
    pub fn css(&self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Difference => "difference",
        }
    }
}

/// What to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    pub dot: Vec2,
    pub ring: Vec2,
    pub dot_scale: f64,
    pub ring_scale: f64,
    pub ring_blend: BlendMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorState {
    pointer: Vec2,
    ring: Follower,
    hovering: bool,
    seen_pointer: bool,
}

impl CursorState {
    pub fn new(smoothing: f64) -> MotionResult<Self> {
        Ok(Self {
            pointer: Vec2::ZERO,
            ring: Follower::new(Vec2::ZERO, smoothing)?,
            hovering: false,
            seen_pointer: false,
        })
    }

    /// Record a pointer move. The first move also places the ring so it does
    /// not sweep in from the corner.
    pub fn pointer_moved(&mut self, position: Vec2, over_interactive: bool) {
        if !self.seen_pointer {
            self.ring.snap_to(position);
            self.seen_pointer = true;
        }
        self.pointer = position;
        self.hovering = over_interactive;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Advance the ring by `dt_ms` and produce the frame to draw.
    pub fn frame(&mut self, dt_ms: f64) -> CursorFrame {
        let ring = self.ring.step(self.pointer, dt_ms);
        if self.hovering {
            CursorFrame {
                dot: self.pointer,
                ring,
                dot_scale: 0.0,
                ring_scale: RING_HOVER_SCALE,
                ring_blend: BlendMode::Difference,
            }
        } else {
            CursorFrame {
                dot: self.pointer,
                ring,
                dot_scale: 1.0,
                ring_scale: 1.0,
                ring_blend: BlendMode::Normal,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fine_pointers_track() {
        assert!(PointerKind::from_fine_match(true).tracks_cursor());
        assert!(!PointerKind::from_fine_match(false).tracks_cursor());
    }

    #[test]
    fn interactive_detection() {
        assert!(is_interactive("A", false));
        assert!(is_interactive("button", false));
        assert!(is_interactive("div", true));
        assert!(!is_interactive("div", false));
        assert!(!is_interactive("span", false));
    }

    #[test]
    fn dot_snaps_ring_trails() {
        let mut cursor = CursorState::new(0.15).unwrap();
        cursor.pointer_moved(Vec2::new(100.0, 100.0), false);
        cursor.pointer_moved(Vec2::new(200.0, 100.0), false);
        let frame = cursor.frame(16.0);
        assert_eq!(frame.dot, Vec2::new(200.0, 100.0));
        assert!(frame.ring.x > 100.0 && frame.ring.x < 200.0);
    }

    #[test]
    fn hover_swaps_visual_state() {
        let mut cursor = CursorState::new(0.15).unwrap();
        cursor.pointer_moved(Vec2::new(10.0, 10.0), true);
        let frame = cursor.frame(16.0);
        assert_eq!(frame.dot_scale, 0.0);
        assert_eq!(frame.ring_scale, RING_HOVER_SCALE);
        assert_eq!(frame.ring_blend, BlendMode::Difference);

        cursor.pointer_moved(Vec2::new(12.0, 10.0), false);
        let frame = cursor.frame(16.0);
        assert_eq!(frame.dot_scale, 1.0);
        assert_eq!(frame.ring_blend.css(), "normal");
    }
}
