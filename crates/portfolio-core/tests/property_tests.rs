//! Property-based tests for the motion primitives
//!
//! Uses proptest to verify the invariants the animated sections rely on.

use portfolio_core::choreography::{hero, narrative, projects, services};
use portfolio_core::content::SERVICES;
use portfolio_core::motion::{
    smoothing_alpha, ElementMetrics, Follower, ScrollRange, ScrollReveal, TriggerEdge, Vec2,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Frame lengths between a 240Hz and a badly janked 10Hz frame
fn frame_ms_strategy() -> impl Strategy<Value = f64> {
    4.0f64..100.0
}

/// Scroll positions of an element top relative to the viewport
fn element_top_strategy() -> impl Strategy<Value = f64> {
    -5000.0f64..5000.0
}

/// A sequence of (element top, frame ms) pairs
fn scroll_session_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((element_top_strategy(), frame_ms_strategy()), 1..60)
}

fn metrics(top: f64) -> ElementMetrics {
    ElementMetrics {
        top,
        height: 320.0,
        viewport_height: 900.0,
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Splitting a frame in two lands on the same smoothing result
    #[test]
    fn smoothing_is_frame_rate_independent(factor in 0.01f64..1.0, dt in frame_ms_strategy()) {
        let whole = smoothing_alpha(factor, dt);
        let half = smoothing_alpha(factor, dt / 2.0);
        let combined = 1.0 - (1.0 - half) * (1.0 - half);
        prop_assert!((whole - combined).abs() < 1e-9);
    }

    /// A follower never overshoots and always closes distance
    #[test]
    fn follower_converges_monotonically(
        factor in 0.01f64..1.0,
        target_x in -2000.0f64..2000.0,
        frames in prop::collection::vec(frame_ms_strategy(), 1..100),
    ) {
        let target = Vec2::new(target_x, 0.0);
        let mut follower = Follower::new(Vec2::ZERO, factor).unwrap();
        let mut last_gap = target_x.abs();
        for dt in frames {
            let pos = follower.step(target, dt);
            let gap = (target.x - pos.x).abs();
            prop_assert!(gap <= last_gap + 1e-9);
            last_gap = gap;
        }
    }

    /// Range progress is always within [0, 1]
    #[test]
    fn range_progress_is_bounded(top in element_top_strategy()) {
        let progress = hero::SCROLL_RANGE.progress(metrics(top));
        prop_assert!((0.0..=1.0).contains(&progress));
    }

    /// Whatever the scroll history, ending above the trigger and letting the
    /// playhead settle restores the exact initial states
    #[test]
    fn reveal_is_exactly_reversible(session in scroll_session_strategy()) {
        let row = services::row_id(&SERVICES[0]);
        let mut reveal = ScrollReveal::new(services::row_trigger(), services::row_reveal(&row).unwrap());

        for (top, dt) in session {
            reveal.update(metrics(top), dt);
        }
        // Back below the fold and give it time to settle
        for _ in 0..200 {
            reveal.update(metrics(5000.0), 16.0);
        }

        prop_assert_eq!(reveal.progress(), 0.0);
        prop_assert_eq!(reveal.states(), reveal.initial_states());
    }

    /// Staying past the trigger always finishes the reveal at rest
    #[test]
    fn reveal_completes_when_held_in_view(session in scroll_session_strategy()) {
        let row = projects::row_id(0);
        let mut reveal = ScrollReveal::new(projects::row_trigger(), projects::row_reveal(&row).unwrap());

        for (top, dt) in session {
            reveal.update(metrics(top), dt);
        }
        for _ in 0..200 {
            reveal.update(metrics(-100.0), 16.0);
        }

        prop_assert_eq!(reveal.progress(), 1.0);
    }

    /// Track translation stays between zero and the full overflow
    #[test]
    fn ticker_translation_is_bounded(
        track in 0.0f64..10000.0,
        viewport in 320.0f64..2560.0,
        top in element_top_strategy(),
    ) {
        let layout = narrative::TickerLayout {
            track_width: track,
            viewport_width: viewport,
            viewport_height: 900.0,
        };
        let x = layout.translate_x(layout.progress(top));
        prop_assert!(x <= 0.0);
        prop_assert!(x >= -layout.scroll_distance());
    }
}

#[test]
fn degenerate_hero_geometry_steps() {
    let range = ScrollRange::new(TriggerEdge::TOP_TOP, TriggerEdge::BOTTOM_TOP);
    let flat = ElementMetrics {
        top: -1.0,
        height: 0.0,
        viewport_height: 900.0,
    };
    assert_eq!(range.progress(flat), 1.0);
}
