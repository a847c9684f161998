//! Magnetic control offset.
//!
//! While the pointer is over a control, the control eases toward a fraction
//! of the pointer's offset from its center. On leave it eases back to zero.

use crate::error::MotionResult;
use crate::motion::{Follower, Vec2};

/// Settled when within this many px of the target.
const SETTLE_EPSILON: f64 = 0.05;

/// Axis-aligned rectangle in viewport px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Offset a control should ease toward for a pointer at `pointer`.
pub fn magnetic_target(pointer: Vec2, rect: Rect, strength: f64) -> Vec2 {
    (pointer - rect.center()) * strength
}

#[derive(Debug, Clone, PartialEq)]
pub struct MagneticState {
    offset: Follower,
    target: Vec2,
    strength: f64,
    enabled: bool,
}

impl MagneticState {
    pub fn new(strength: f64, smoothing: f64, enabled: bool) -> MotionResult<Self> {
        Ok(Self {
            offset: Follower::new(Vec2::ZERO, smoothing)?,
            target: Vec2::ZERO,
            strength,
            enabled,
        })
    }

    pub fn pointer_moved(&mut self, pointer: Vec2, rect: Rect) {
        if self.enabled {
            self.target = magnetic_target(pointer, rect, self.strength);
        }
    }

    pub fn pointer_left(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// Advance by `dt_ms`. Returns the offset to draw, or `None` when already
    /// resting at the target.
    pub fn frame(&mut self, dt_ms: f64) -> Option<Vec2> {
        if self.is_settled() {
            return None;
        }
        let position = self.offset.step(self.target, dt_ms);
        if self.offset.is_near(self.target, SETTLE_EPSILON) {
            self.offset.snap_to(self.target);
            return Some(self.target);
        }
        Some(position)
    }

    pub fn is_settled(&self) -> bool {
        self.offset.position() == self.target
    }

    pub fn offset(&self) -> Vec2 {
        self.offset.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect {
            left: 100.0,
            top: 100.0,
            width: 100.0,
            height: 40.0,
        }
    }

    #[test]
    fn target_is_thirty_percent_of_offset() {
        let target = magnetic_target(Vec2::new(200.0, 120.0), rect(), 0.3);
        assert!((target.x - 15.0).abs() < 1e-9);
        assert_eq!(target.y, 0.0);
    }

    #[test]
    fn eases_out_and_back() {
        let mut magnet = MagneticState::new(0.3, 0.2, true).unwrap();
        magnet.pointer_moved(Vec2::new(200.0, 120.0), rect());
        let first = magnet.frame(16.0).unwrap();
        assert!(first.x > 0.0 && first.x < 15.0);

        magnet.pointer_left();
        let mut last = first;
        while let Some(offset) = magnet.frame(16.0) {
            last = offset;
        }
        assert_eq!(last, Vec2::ZERO);
        assert!(magnet.is_settled());
    }

    #[test]
    fn disabled_never_moves() {
        let mut magnet = MagneticState::new(0.3, 0.2, false).unwrap();
        magnet.pointer_moved(Vec2::new(500.0, 500.0), rect());
        assert_eq!(magnet.frame(16.0), None);
        assert_eq!(magnet.offset(), Vec2::ZERO);
    }
}
