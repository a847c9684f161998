//! Error types for the portfolio core

use thiserror::Error;

/// Errors raised while building motion primitives.
///
/// These only surface from configuration mistakes in the choreography
/// presets; nothing at runtime produces them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// A tween duration was negative, NaN or infinite
    #[error("Invalid duration for '{target}': {duration}")]
    InvalidDuration { target: String, duration: f64 },

    /// A tween start position resolved to a negative or non-finite time
    #[error("Invalid start time for '{target}': {start}")]
    InvalidStart { target: String, start: f64 },

    /// A stagger was requested over zero targets
    #[error("Stagger requires at least one target")]
    EmptyStagger,

    /// A timeline was built without any tweens
    #[error("Timeline has no tweens")]
    EmptyTimeline,

    /// A scroll range whose end is not strictly after its start
    #[error("Scroll range end must come after its start (span {span})")]
    DegenerateScrollRange { span: f64 },

    /// Smoothing factors must lie in (0, 1]
    #[error("Smoothing factor out of range: {0}")]
    InvalidSmoothing(f64),
}

/// Result type alias for motion construction
pub type MotionResult<T> = std::result::Result<T, MotionError>;
