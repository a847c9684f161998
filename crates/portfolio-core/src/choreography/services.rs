//! Services list: each row reveals when it scrolls into view.

use crate::content::ServiceEntry;
use crate::error::MotionResult;
use crate::motion::{Ease, Position, Timeline, TimelineBuilder, TriggerEdge, VisualState};
use crate::page::Anchor;

pub const SECTION_ID: &str = Anchor::Process.id();

pub fn row_id(entry: &ServiceEntry) -> String {
    format!("service-row-{}", entry.id)
}

/// Row top reaching 85% down the viewport.
pub fn row_trigger() -> TriggerEdge {
    TriggerEdge::new(0.0, 0.85)
}

/// Row rises and fades in while its divider rule wipes across.
pub fn row_reveal(row_id: &str) -> MotionResult<Timeline> {
    TimelineBuilder::new()
        .to(
            row_id,
            VisualState::rest().with_y(60.0).with_opacity(0.0),
            VisualState::rest(),
            0.9,
            Ease::Power3Out,
        )
        .at(Position::WithPrevious)
        .to(
            format!("{row_id}-rule"),
            VisualState::rest().with_x_percent(-101.0),
            VisualState::rest(),
            1.1,
            Ease::ExpoOut,
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICES;

    #[test]
    fn row_ids_follow_entry_ids() {
        assert_eq!(row_id(&SERVICES[0]), "service-row-01");
    }

    #[test]
    fn reveal_targets_row_and_rule() {
        let timeline = row_reveal("service-row-02").unwrap();
        assert_eq!(timeline.targets(), ["service-row-02", "service-row-02-rule"]);
        assert_eq!(timeline.duration(), 1.1);
    }
}
