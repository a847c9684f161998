//! Hero: one-shot entrance, then scroll-linked parallax, fade and distortion.

use crate::content::HERO_LINES;
use crate::error::MotionResult;
use crate::motion::{clamp01, Ease, Position, ScrollRange, Timeline, TimelineBuilder, TriggerEdge, VisualState};

pub const SECTION_ID: &str = "hero";
pub const TITLE_ID: &str = "hero-title";
pub const IMAGE_ID: &str = "hero-image";
/// Inner image layer; the scroll parallax moves this so it composes with the
/// entrance wipe on [`IMAGE_ID`].
pub const IMAGE_INNER_ID: &str = "hero-image-inner";
pub const TEXT_ID: &str = "hero-text";
pub const TAGLINE_ID: &str = "hero-tagline";

/// `<filter>` applied to the title.
pub const DISTORTION_FILTER_ID: &str = "hero-distortion";
/// `<feDisplacementMap>` whose `scale` tracks scroll.
pub const DISTORTION_MAP_ID: &str = "hero-distortion-map";

/// Displacement scale at the end of the hero's scroll range.
pub const MAX_DISTORTION: f64 = 80.0;

/// Scroll range over which the continuous hero effects run: from the hero's
/// top at the viewport top until its bottom leaves through the top.
pub const SCROLL_RANGE: ScrollRange = ScrollRange::new(TriggerEdge::TOP_TOP, TriggerEdge::BOTTOM_TOP);

pub fn line_id(index: usize) -> String {
    format!("hero-line-{index}")
}

/// Staggered line reveals, an image wipe, then the tagline.
pub fn entrance() -> MotionResult<Timeline> {
    let lines = (0..HERO_LINES.len()).map(line_id);
    TimelineBuilder::new()
        .stagger(
            lines,
            VisualState::rest().with_y_percent(110.0).with_rotate(4.0),
            VisualState::rest(),
            1.2,
            Ease::Power4Out,
            0.12,
        )
        .at(Position::Offset(-0.9))
        .to(
            IMAGE_ID,
            VisualState::rest().with_clip_bottom(100.0).with_scale(1.2),
            VisualState::rest(),
            1.6,
            Ease::ExpoInOut,
        )
        .at(Position::Offset(-0.8))
        .to(
            TAGLINE_ID,
            VisualState::rest().with_y(24.0).with_opacity(0.0),
            VisualState::rest(),
            0.8,
            Ease::Power3Out,
        )
        .build()
}

/// Continuous hero state for a progress through [`SCROLL_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroScrollFrame {
    pub image: VisualState,
    pub text: VisualState,
    /// `scale` attribute for the displacement map
    pub distortion: f64,
}

pub fn scroll_frame(progress: f64) -> HeroScrollFrame {
    let p = clamp01(progress);
    let fade = clamp01(p / 0.6);
    HeroScrollFrame {
        image: VisualState::rest().with_y_percent(25.0 * p).with_scale(1.0 + 0.1 * p),
        text: VisualState::rest()
            .with_y(-80.0 * p)
            .with_opacity(1.0 - fade)
            .with_blur(12.0 * fade),
        distortion: MAX_DISTORTION * p,
    }
}
