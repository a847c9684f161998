//! Frame-rate independent exponential smoothing.

use crate::error::{MotionError, MotionResult};

use super::Vec2;

/// Reference frame length the smoothing factors are tuned for (60Hz).
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Fraction of the remaining distance to cover in `dt_ms`, for a factor
/// tuned per 60Hz frame.
///
/// Two 8ms steps land on the same point as one 16ms step.
pub fn smoothing_alpha(factor: f64, dt_ms: f64) -> f64 {
    let frames = dt_ms.max(0.0) / FRAME_MS;
    1.0 - (1.0 - factor).powf(frames)
}

/// A point that chases a target with exponential smoothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Follower {
    position: Vec2,
    factor: f64,
}

impl Follower {
    /// `factor` is the fraction of the distance covered per 60Hz frame and
    /// must lie in (0, 1].
    pub fn new(start: Vec2, factor: f64) -> MotionResult<Self> {
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(MotionError::InvalidSmoothing(factor));
        }
        Ok(Self {
            position: start,
            factor,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Teleport without smoothing.
    pub fn snap_to(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Move toward `target` for `dt_ms` and return the new position.
    pub fn step(&mut self, target: Vec2, dt_ms: f64) -> Vec2 {
        let alpha = smoothing_alpha(self.factor, dt_ms);
        self.position = self.position.lerp(target, alpha);
        self.position
    }

    /// Within `epsilon` px of `target`.
    pub fn is_near(&self, target: Vec2, epsilon: f64) -> bool {
        (target - self.position).length() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_reference_frame_covers_factor() {
        assert!((smoothing_alpha(0.15, FRAME_MS) - 0.15).abs() < 1e-12);
        assert_eq!(smoothing_alpha(0.15, 0.0), 0.0);
    }

    #[test]
    fn step_moves_toward_target() {
        let mut follower = Follower::new(Vec2::ZERO, 0.5).unwrap();
        let pos = follower.step(Vec2::new(100.0, 0.0), FRAME_MS);
        assert!((pos.x - 50.0).abs() < 1e-9);
    }

    #[test]
    fn factor_one_snaps() {
        let mut follower = Follower::new(Vec2::ZERO, 1.0).unwrap();
        let pos = follower.step(Vec2::new(10.0, 20.0), 1.0);
        assert_eq!(pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn rejects_out_of_range_factor() {
        assert!(Follower::new(Vec2::ZERO, 0.0).is_err());
        assert!(Follower::new(Vec2::ZERO, 1.5).is_err());
        assert!(Follower::new(Vec2::ZERO, f64::NAN).is_err());
    }
}
