//! Timelines: ordered tweens over named targets, sampled as a pure function
//! of time.

use crate::error::{MotionError, MotionResult};

use super::{Ease, VisualState};

/// A single interpolation of one target between two states.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: String,
    pub from: VisualState,
    pub to: VisualState,
    /// Start time in seconds
    pub start: f64,
    /// Duration in seconds
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// State of this tween's target at `time`.
    pub fn sample(&self, time: f64) -> VisualState {
        if time <= self.start {
            return self.from;
        }
        if time >= self.end() || self.duration == 0.0 {
            return self.to;
        }
        let linear = (time - self.start) / self.duration;
        self.from.lerp(&self.to, self.ease.apply(linear))
    }
}

/// Where a tween is placed relative to what is already on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// After everything added so far
    End,
    /// Offset (seconds, may be negative) from the end of everything added so far
    Offset(f64),
    /// Same start as the previously added tween
    WithPrevious,
    /// Absolute time in seconds
    At(f64),
}

/// Builder collecting tweens in registration order.
///
/// # Example
///
/// ```
/// use portfolio_core::motion::{Ease, Position, TimelineBuilder, VisualState};
///
/// let hidden = VisualState::rest().with_opacity(0.0);
/// let timeline = TimelineBuilder::new()
///     .to("title", hidden, VisualState::rest(), 0.8, Ease::Power3Out)
///     .at(Position::Offset(-0.4))
///     .to("subtitle", hidden, VisualState::rest(), 0.6, Ease::Power2Out)
///     .build()
///     .unwrap();
///
/// assert!((timeline.duration() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    tweens: Vec<Tween>,
    next_position: Option<Position>,
    error: Option<MotionError>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position of the next tween added. Defaults to [`Position::End`].
    pub fn at(mut self, position: Position) -> Self {
        self.next_position = Some(position);
        self
    }

    /// Append one tween.
    pub fn to(
        mut self,
        target: impl Into<String>,
        from: VisualState,
        to: VisualState,
        duration: f64,
        ease: Ease,
    ) -> Self {
        let target = target.into();
        let start = self.resolve_start();
        self.push(Tween {
            target,
            from,
            to,
            start,
            duration,
            ease,
        });
        self
    }

    /// Append one tween per target, each starting `each` seconds after the
    /// previous one. The first starts at the resolved position.
    pub fn stagger<I, S>(
        mut self,
        targets: I,
        from: VisualState,
        to: VisualState,
        duration: f64,
        ease: Ease,
        each: f64,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let base = self.resolve_start();
        let mut count = 0usize;
        for (index, target) in targets.into_iter().enumerate() {
            count += 1;
            self.push(Tween {
                target: target.into(),
                from,
                to,
                start: base + each * index as f64,
                duration,
                ease,
            });
        }
        if count == 0 && self.error.is_none() {
            self.error = Some(MotionError::EmptyStagger);
        }
        self
    }

    /// Validate and produce the timeline.
    pub fn build(self) -> MotionResult<Timeline> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.tweens.is_empty() {
            return Err(MotionError::EmptyTimeline);
        }
        Ok(Timeline::from_tweens(self.tweens))
    }

    fn end(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    fn resolve_start(&mut self) -> f64 {
        match self.next_position.take().unwrap_or(Position::End) {
            Position::End => self.end(),
            Position::Offset(offset) => self.end() + offset,
            Position::WithPrevious => self.tweens.last().map(|t| t.start).unwrap_or(0.0),
            Position::At(time) => time,
        }
    }

    fn push(&mut self, tween: Tween) {
        if self.error.is_some() {
            return;
        }
        if !tween.duration.is_finite() || tween.duration < 0.0 {
            self.error = Some(MotionError::InvalidDuration {
                target: tween.target,
                duration: tween.duration,
            });
            return;
        }
        if !tween.start.is_finite() || tween.start < 0.0 {
            self.error = Some(MotionError::InvalidStart {
                target: tween.target,
                start: tween.start,
            });
            return;
        }
        self.tweens.push(tween);
    }
}

/// An immutable set of tweens. Sampling is a pure function of time.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    tweens: Vec<Tween>,
    /// Targets in order of first appearance
    targets: Vec<String>,
    duration: f64,
}

impl Timeline {
    fn from_tweens(tweens: Vec<Tween>) -> Self {
        let mut targets: Vec<String> = Vec::new();
        for tween in &tweens {
            if !targets.contains(&tween.target) {
                targets.push(tween.target.clone());
            }
        }
        let duration = tweens.iter().map(Tween::end).fold(0.0, f64::max);
        Self {
            tweens,
            targets,
            duration,
        }
    }

    /// Total length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    /// State of every target at `time` seconds.
    ///
    /// Before a target's first tween starts it holds that tween's `from`
    /// state, so sampling at 0 yields the exact initial layout. Later tweens
    /// on the same target override earlier ones once they start.
    pub fn sample(&self, time: f64) -> Vec<(&str, VisualState)> {
        self.targets
            .iter()
            .map(|target| (target.as_str(), self.sample_target(target, time)))
            .collect()
    }

    /// Sample by progress in [0, 1] instead of seconds.
    pub fn sample_progress(&self, progress: f64) -> Vec<(&str, VisualState)> {
        self.sample(super::clamp01(progress) * self.duration)
    }

    /// State of one target at `time`. Targets not on the timeline are at rest.
    pub fn sample_target(&self, target: &str, time: f64) -> VisualState {
        let mut current: Option<&Tween> = None;
        for tween in self.tweens.iter().filter(|t| t.target == target) {
            let replaces = match current {
                None => true,
                // Latest start not after `time`; ties go to the later registration.
                Some(held) if held.start <= time => tween.start <= time && tween.start >= held.start,
                // Nothing started yet: hold the earliest tween's `from`.
                Some(held) => tween.start <= time || tween.start < held.start,
            };
            if replaces {
                current = Some(tween);
            }
        }
        current.map_or_else(VisualState::rest, |tween| tween.sample(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden() -> VisualState {
        VisualState::rest().with_y(50.0).with_opacity(0.0)
    }

    #[test]
    fn sequential_tweens_follow_each_other() {
        let timeline = TimelineBuilder::new()
            .to("a", hidden(), VisualState::rest(), 1.0, Ease::Linear)
            .to("b", hidden(), VisualState::rest(), 0.5, Ease::Linear)
            .build()
            .unwrap();

        assert_eq!(timeline.tweens()[1].start, 1.0);
        assert_eq!(timeline.duration(), 1.5);
    }

    #[test]
    fn negative_offset_overlaps() {
        let timeline = TimelineBuilder::new()
            .to("a", hidden(), VisualState::rest(), 1.0, Ease::Linear)
            .at(Position::Offset(-0.25))
            .to("b", hidden(), VisualState::rest(), 1.0, Ease::Linear)
            .build()
            .unwrap();

        assert_eq!(timeline.tweens()[1].start, 0.75);
        assert_eq!(timeline.duration(), 1.75);
    }

    #[test]
    fn stagger_spaces_starts() {
        let timeline = TimelineBuilder::new()
            .stagger(["l0", "l1", "l2"], hidden(), VisualState::rest(), 1.0, Ease::Power3Out, 0.1)
            .build()
            .unwrap();

        let starts: Vec<f64> = timeline.tweens().iter().map(|t| t.start).collect();
        assert_eq!(starts.len(), 3);
        assert!((starts[2] - 0.2).abs() < 1e-12);
        assert_eq!(timeline.targets(), ["l0", "l1", "l2"]);
    }

    #[test]
    fn sample_at_zero_is_initial_state() {
        let timeline = TimelineBuilder::new()
            .at(Position::At(0.5))
            .to("a", hidden(), VisualState::rest(), 1.0, Ease::ExpoOut)
            .build()
            .unwrap();

        let sampled = timeline.sample(0.0);
        assert_eq!(sampled, vec![("a", hidden())]);
        assert_eq!(timeline.sample(10.0), vec![("a", VisualState::rest())]);
    }

    #[test]
    fn later_tween_overrides_once_started() {
        let mid = VisualState::rest().with_y(20.0);
        let timeline = TimelineBuilder::new()
            .to("a", hidden(), mid, 1.0, Ease::Linear)
            .to("a", mid, VisualState::rest(), 1.0, Ease::Linear)
            .build()
            .unwrap();

        assert_eq!(timeline.sample_target("a", 1.0).y, 20.0);
        assert_eq!(timeline.sample_target("a", 1.5).y, 10.0);
        assert_eq!(timeline.sample_target("a", 0.5).y, 35.0);
    }

    #[test]
    fn sample_progress_clamps() {
        let timeline = TimelineBuilder::new()
            .to("a", hidden(), VisualState::rest(), 2.0, Ease::Linear)
            .build()
            .unwrap();
        assert_eq!(timeline.sample_progress(-1.0)[0].1, hidden());
        assert_eq!(timeline.sample_progress(0.5)[0].1.y, 25.0);
    }

    #[test]
    fn invalid_duration_is_rejected() {
        let err = TimelineBuilder::new()
            .to("a", hidden(), VisualState::rest(), -1.0, Ease::Linear)
            .build()
            .unwrap_err();
        assert!(matches!(err, MotionError::InvalidDuration { .. }));
    }

    #[test]
    fn offset_before_zero_is_rejected() {
        let err = TimelineBuilder::new()
            .at(Position::Offset(-1.0))
            .to("a", hidden(), VisualState::rest(), 1.0, Ease::Linear)
            .build()
            .unwrap_err();
        assert!(matches!(err, MotionError::InvalidStart { .. }));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(TimelineBuilder::new().build().unwrap_err(), MotionError::EmptyTimeline);
        let err = TimelineBuilder::new()
            .stagger(Vec::<String>::new(), hidden(), VisualState::rest(), 1.0, Ease::Linear, 0.1)
            .build()
            .unwrap_err();
        assert_eq!(err, MotionError::EmptyStagger);
    }

    #[test]
    fn earliest_tween_sets_the_initial_state_regardless_of_order() {
        let late_from = VisualState::rest().with_y(10.0);
        let early_from = VisualState::rest().with_y(90.0);
        let timeline = TimelineBuilder::new()
            .at(Position::At(1.0))
            .to("row", late_from, VisualState::rest(), 1.0, Ease::Linear)
            .at(Position::At(0.0))
            .to("row", early_from, late_from, 1.0, Ease::Linear)
            .build()
            .unwrap();

        assert_eq!(timeline.sample_target("row", 0.0), early_from);
        assert_eq!(timeline.sample_target("row", 1.0), late_from);
        assert_eq!(timeline.sample_target("row", 2.0), VisualState::rest());
    }
}
