//! Motion primitives.
//!
//! A timeline is a pure function from a time (or a 0..1 progress) to a set of
//! per-target [`VisualState`]s. Browser code owns the clock and the DOM; it
//! feeds elapsed milliseconds and element metrics in and writes the sampled
//! states back out.

mod easing;
mod playhead;
mod reveal;
mod scroll;
mod smoothing;
mod timeline;
mod velocity;
mod visual;

pub use easing::Ease;
pub use playhead::{Direction, Playhead};
pub use reveal::{RevealUpdate, ScrollReveal};
pub use scroll::{ElementMetrics, ScrollRange, ToggleAction, ToggleTrigger, TriggerEdge};
pub use smoothing::{smoothing_alpha, Follower, FRAME_MS};
pub use timeline::{Position, Timeline, TimelineBuilder, Tween};
pub use velocity::{ScrollVelocity, SkewFollower};
pub use visual::VisualState;

/// A 2D point or offset in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn lerp(self, to: Vec2, t: f64) -> Vec2 {
        Vec2 {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Linear interpolation; `t` is not clamped.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Clamp into [0, 1], mapping NaN to 0.
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
