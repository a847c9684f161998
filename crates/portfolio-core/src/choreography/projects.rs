//! Project rows: offset and transparent until their top crosses 80% of the
//! viewport.

use crate::error::MotionResult;
use crate::motion::{Ease, Position, Timeline, TimelineBuilder, TriggerEdge, VisualState};
use crate::page::Anchor;

pub const SECTION_ID: &str = Anchor::Work.id();

pub fn row_id(index: usize) -> String {
    format!("project-row-{index}")
}

pub fn row_trigger() -> TriggerEdge {
    TriggerEdge::new(0.0, 0.8)
}

pub fn row_reveal(row_id: &str) -> MotionResult<Timeline> {
    TimelineBuilder::new()
        .to(
            row_id,
            VisualState::rest().with_y(120.0).with_opacity(0.0),
            VisualState::rest(),
            1.2,
            Ease::Power4Out,
        )
        .at(Position::WithPrevious)
        .to(
            format!("{row_id}-image"),
            VisualState::rest().with_scale(1.15),
            VisualState::rest(),
            1.4,
            Ease::Power3Out,
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_starts_offset_and_transparent() {
        let timeline = row_reveal(&row_id(1)).unwrap();
        let start = timeline.sample_target("project-row-1", 0.0);
        assert_eq!(start.y, 120.0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(
            timeline.sample_target("project-row-1", timeline.duration()),
            VisualState::rest()
        );
    }
}
