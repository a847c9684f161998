//! Scroll-triggered reveals shared by the services, projects and ticker
//! sections.

use portfolio_core::motion::{ScrollReveal, TriggerEdge};
use portfolio_core::Timeline;
use web_sys::Element;

use super::{element, metrics_of, FrameLoop, Registration, Targets};

/// One reveal: an anchor element whose position drives a timeline.
pub struct RevealSpec {
    pub anchor_id: String,
    pub edge: TriggerEdge,
    pub timeline: Timeline,
}

impl RevealSpec {
    pub fn new(anchor_id: impl Into<String>, edge: TriggerEdge, timeline: Timeline) -> Self {
        Self {
            anchor_id: anchor_id.into(),
            edge,
            timeline,
        }
    }
}

struct Active {
    anchor_id: String,
    anchor: Element,
    reveal: ScrollReveal,
    targets: Targets,
}

/// Hide every target in its initial state, then play each timeline as its
/// anchor crosses the trigger edge and reverse it when scrolling back.
///
/// Reveals whose anchor is not mounted are dropped.
pub fn register_reveals(specs: Vec<RevealSpec>) -> super::DomResult<Registration> {
    let mut active = Vec::with_capacity(specs.len());
    for spec in specs {
        let anchor = match element(&spec.anchor_id) {
            Ok(anchor) => anchor,
            Err(err) => {
                tracing::debug!(error = %err, "Skipping reveal");
                continue;
            }
        };
        let targets = Targets::resolve(spec.timeline.targets());
        let reveal = ScrollReveal::new(spec.edge, spec.timeline);
        targets.apply(&reveal.initial_states())?;
        active.push(Active {
            anchor_id: spec.anchor_id,
            anchor,
            reveal,
            targets,
        });
    }

    let mut registration = Registration::new();
    if active.is_empty() {
        return Ok(registration);
    }
    tracing::debug!(count = active.len(), "Reveals registered");

    registration.run(FrameLoop::start(move |tick| {
        for item in active.iter_mut() {
            let Ok(measured) = metrics_of(&item.anchor) else {
                continue;
            };
            let metrics = item.reveal.resting_metrics(&item.anchor_id, measured);
            let update = item.reveal.update(metrics, tick.dt_ms);
            if update.changed || update.action.is_some() {
                if let Err(err) = item.targets.apply(&item.reveal.states()) {
                    tracing::debug!(error = %err, "Reveal style write failed");
                }
            }
        }
    }));
    Ok(registration)
}
