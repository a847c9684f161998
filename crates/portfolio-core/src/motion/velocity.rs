//! Scroll velocity tracking and the skew derived from it.

use super::{lerp, smoothing_alpha};

/// Instantaneous scroll velocity from successive samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollVelocity {
    last: Option<(f64, f64)>,
    velocity: f64,
}

impl ScrollVelocity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `scroll_y` (px) at `now_ms` and return velocity in px/s.
    ///
    /// Samples with a non-increasing timestamp keep the previous velocity.
    pub fn sample(&mut self, scroll_y: f64, now_ms: f64) -> f64 {
        if let Some((last_y, last_ms)) = self.last {
            let dt = now_ms - last_ms;
            if dt > 0.0 {
                self.velocity = (scroll_y - last_y) / dt * 1000.0;
            }
        }
        self.last = Some((scroll_y, now_ms));
        self.velocity
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

/// Skew (degrees) eased toward a target proportional to scroll velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct SkewFollower {
    current: f64,
    /// px/s of scroll per degree of skew
    px_per_degree: f64,
    max_degrees: f64,
    factor: f64,
}

impl SkewFollower {
    pub fn new(px_per_degree: f64, max_degrees: f64, factor: f64) -> Self {
        Self {
            current: 0.0,
            px_per_degree: px_per_degree.abs().max(f64::EPSILON),
            max_degrees: max_degrees.abs(),
            factor: factor.clamp(f64::EPSILON, 1.0),
        }
    }

    /// Skew the content leans into for a given velocity. Scrolling down
    /// leans content backwards (negative skew).
    pub fn target_for(&self, velocity: f64) -> f64 {
        (-velocity / self.px_per_degree).clamp(-self.max_degrees, self.max_degrees)
    }

    /// Ease toward the target for `velocity` over `dt_ms`.
    pub fn step(&mut self, velocity: f64, dt_ms: f64) -> f64 {
        let target = self.target_for(velocity);
        self.current = lerp(self.current, target, smoothing_alpha(self.factor, dt_ms));
        self.current
    }

    pub fn current(&self) -> f64 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_from_two_samples() {
        let mut tracker = ScrollVelocity::new();
        assert_eq!(tracker.sample(0.0, 0.0), 0.0);
        assert_eq!(tracker.sample(50.0, 100.0), 500.0);
        // Duplicate timestamp keeps the previous reading
        assert_eq!(tracker.sample(80.0, 100.0), 500.0);
    }

    #[test]
    fn skew_is_clamped() {
        let skew = SkewFollower::new(300.0, 12.0, 0.1);
        assert_eq!(skew.target_for(600.0), -2.0);
        assert_eq!(skew.target_for(-100_000.0), 12.0);
    }

    #[test]
    fn skew_decays_when_scrolling_stops() {
        let mut skew = SkewFollower::new(300.0, 12.0, 0.2);
        for _ in 0..10 {
            skew.step(3000.0, 16.0);
        }
        assert!(skew.current() < -5.0);
        for _ in 0..200 {
            skew.step(0.0, 16.0);
        }
        assert!(skew.current().abs() < 0.01);
    }
}
