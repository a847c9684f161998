//! Reveal-on-scroll: a toggle trigger driving a playhead over a timeline.
//!
//! Crossing the trigger edge plays the timeline forward; scrolling back above
//! it reverses from wherever the playhead is. Reversal lands on time 0, which
//! samples to the exact initial states.

use super::{ElementMetrics, Playhead, Timeline, ToggleAction, ToggleTrigger, TriggerEdge, VisualState};

/// Outcome of one [`ScrollReveal::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealUpdate {
    pub action: Option<ToggleAction>,
    /// The sampled states differ from the previous frame
    pub changed: bool,
    playing: bool,
}

impl RevealUpdate {
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[derive(Debug, Clone)]
pub struct ScrollReveal {
    trigger: ToggleTrigger,
    playhead: Playhead,
    timeline: Timeline,
}

impl ScrollReveal {
    pub fn new(edge: TriggerEdge, timeline: Timeline) -> Self {
        Self {
            trigger: ToggleTrigger::new(edge),
            playhead: Playhead::new(timeline.duration()),
            timeline,
        }
    }

    /// Feed this frame's geometry and elapsed time.
    pub fn update(&mut self, metrics: ElementMetrics, dt_ms: f64) -> RevealUpdate {
        let action = self.trigger.update(metrics);
        match action {
            Some(ToggleAction::Enter) => self.playhead.play(),
            Some(ToggleAction::LeaveBack) => self.playhead.reverse(),
            None => {}
        }
        let changed = self.playhead.advance(dt_ms);
        RevealUpdate {
            action,
            changed,
            playing: !self.playhead.is_settled(),
        }
    }

    /// Current state of every target.
    pub fn states(&self) -> Vec<(&str, VisualState)> {
        self.timeline.sample(self.playhead.time())
    }

    /// Geometry of `anchor` with this reveal's own vertical offset taken back
    /// out, for anchors that are also targets of the timeline.
    pub fn resting_metrics(&self, anchor: &str, measured: ElementMetrics) -> ElementMetrics {
        let state = self.timeline.sample_target(anchor, self.playhead.time());
        ElementMetrics {
            top: measured.top - state.y - state.y_percent / 100.0 * measured.height,
            ..measured
        }
    }

    /// States before anything has played.
    pub fn initial_states(&self) -> Vec<(&str, VisualState)> {
        self.timeline.sample(0.0)
    }

    /// Skip straight to the revealed state.
    pub fn complete(&mut self) {
        self.playhead.complete();
    }

    pub fn progress(&self) -> f64 {
        self.playhead.progress()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Ease, TimelineBuilder};

    fn reveal() -> ScrollReveal {
        let timeline = TimelineBuilder::new()
            .to(
                "row",
                VisualState::rest().with_y(80.0).with_opacity(0.0),
                VisualState::rest(),
                1.0,
                Ease::Power3Out,
            )
            .build()
            .unwrap();
        ScrollReveal::new(TriggerEdge::new(0.0, 0.85), timeline)
    }

    fn metrics(top: f64) -> ElementMetrics {
        ElementMetrics {
            top,
            height: 100.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn stays_idle_below_fold() {
        let mut reveal = reveal();
        let update = reveal.update(metrics(950.0), 16.0);
        assert_eq!(update.action, None);
        assert!(!update.changed);
        assert_eq!(reveal.states(), reveal.initial_states());
    }

    #[test]
    fn plays_to_rest_once_in_view() {
        let mut reveal = reveal();
        let update = reveal.update(metrics(600.0), 16.0);
        assert_eq!(update.action, Some(ToggleAction::Enter));
        assert!(update.is_playing());
        for _ in 0..100 {
            reveal.update(metrics(600.0), 16.0);
        }
        assert_eq!(reveal.states(), vec![("row", VisualState::rest())]);
    }

    #[test]
    fn interrupted_reveal_returns_exactly_to_start() {
        let mut reveal = reveal();
        reveal.update(metrics(600.0), 16.0);
        reveal.update(metrics(600.0), 200.0);
        assert!(reveal.progress() > 0.0 && reveal.progress() < 1.0);

        let update = reveal.update(metrics(950.0), 16.0);
        assert_eq!(update.action, Some(ToggleAction::LeaveBack));
        for _ in 0..100 {
            reveal.update(metrics(950.0), 16.0);
        }
        assert_eq!(reveal.progress(), 0.0);
        assert_eq!(reveal.states(), reveal.initial_states());
    }

    #[test]
    fn hidden_anchor_triggers_at_its_resting_position() {
        let mut reveal = reveal();
        // Resting top 840 sits above the 850 line; the 80px hidden offset
        // puts the measured box at 920.
        let resting = reveal.resting_metrics("row", metrics(920.0));
        assert_eq!(resting.top, 840.0);
        let update = reveal.update(resting, 16.0);
        assert_eq!(update.action, Some(ToggleAction::Enter));
    }

    #[test]
    fn settled_anchor_is_measured_as_is() {
        let mut reveal = reveal();
        reveal.complete();
        assert_eq!(reveal.resting_metrics("row", metrics(500.0)), metrics(500.0));
        assert_eq!(reveal.resting_metrics("other", metrics(500.0)).top, 500.0);
    }
}
