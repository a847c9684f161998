//! Philosophy ticker
//!
//! The section is as tall as the viewport plus the track's horizontal
//! overflow, and its inner frame is `position: sticky`, so the frame stays
//! pinned while the reader scrolls through the extra height. That scroll is
//! mapped onto the track's horizontal translation.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo::events::EventListener;
use portfolio_core::choreography::narrative::{
    self, TickerLayout, HIGHLIGHT_CLASS, SECTION_ID, TRACK_ID,
};
use portfolio_core::content::{NarrativeItem, NARRATIVE};
use portfolio_core::motion::{ScrollReveal, ScrollVelocity};
use portfolio_core::VisualState;
use web_sys::HtmlElement;

use crate::context::use_site_config;
use crate::dom::{self, apply_visual, toggle_class, use_motion, FrameLoop, Registration, Targets};

const STATIC_CLASS: &str = "is-static";

fn item_class(item: &NarrativeItem) -> &'static str {
    match item {
        NarrativeItem::Text(_) => "ticker-item ticker-text",
        NarrativeItem::Glyph(_) => "ticker-item ticker-glyph",
        NarrativeItem::Highlight(_) => "ticker-item ticker-text ticker-highlight",
    }
}

#[component]
pub fn Narrative() -> Element {
    let config = use_site_config();

    use_motion("narrative", move || {
        let section = dom::html_element(SECTION_ID)?;
        if !dom::motion_allowed(&config) {
            toggle_class(&section, STATIC_CLASS, true)?;
            return Ok(Registration::new());
        }
        register(section)
    });

    rsx! {
        section { id: SECTION_ID, class: "philosophy",
            div { class: "philosophy-pin",
                span { class: "section-kicker philosophy-kicker", "(Philosophy)" }
                div { id: TRACK_ID, class: "philosophy-track",
                    for (index, item) in NARRATIVE.iter().enumerate() {
                        span {
                            key: "{index}",
                            id: narrative::item_id(index),
                            class: item_class(item),
                            "{item.text()}"
                        }
                    }
                }
            }
        }
    }
}

/// One ticker item and its entrance.
struct Item {
    element: HtmlElement,
    reveal: ScrollReveal,
    targets: Targets,
}

fn measure(track: &HtmlElement) -> dom::DomResult<TickerLayout> {
    let (viewport_width, viewport_height) = dom::viewport_size()?;
    Ok(TickerLayout {
        track_width: f64::from(track.scroll_width()),
        viewport_width,
        viewport_height,
    })
}

fn pin(section: &HtmlElement, layout: TickerLayout) -> dom::DomResult<()> {
    section
        .style()
        .set_property("height", &format!("{}px", layout.pin_height()))?;
    Ok(())
}

fn register(section: HtmlElement) -> dom::DomResult<Registration> {
    let track = dom::html_element(TRACK_ID)?;
    let layout = Rc::new(Cell::new(measure(&track)?));
    pin(&section, layout.get())?;

    let mut items = Vec::with_capacity(NARRATIVE.len());
    let mut highlight = None;
    for (index, entry) in NARRATIVE.iter().enumerate() {
        let id = narrative::item_id(index);
        let element = match dom::html_element(&id) {
            Ok(element) => element,
            Err(err) => {
                tracing::debug!(error = %err, "Ticker item missing");
                continue;
            }
        };
        if matches!(entry, NarrativeItem::Highlight(_)) {
            highlight = Some(element.clone());
        }
        let timeline = match narrative::item_entrance(&id) {
            Ok(timeline) => timeline,
            Err(err) => {
                tracing::warn!(error = %err, "Ticker entrance invalid");
                continue;
            }
        };
        let targets = Targets::resolve([id.as_str()]);
        let reveal = ScrollReveal::new(narrative::item_trigger(), timeline);
        targets.apply(&reveal.initial_states())?;
        items.push(Item { element, reveal, targets });
    }

    let mut registration = Registration::new();

    let resize_layout = Rc::clone(&layout);
    let resize_track = track.clone();
    let resize_section = section.clone();
    let window = dom::window()?;
    registration.listen(EventListener::new(&window, "resize", move |_| {
        match measure(&resize_track).and_then(|measured| {
            resize_layout.set(measured);
            pin(&resize_section, measured)
        }) {
            Ok(()) => tracing::debug!("Ticker remeasured"),
            Err(err) => tracing::debug!(error = %err, "Ticker remeasure failed"),
        }
    }));

    let mut velocity = ScrollVelocity::new();
    let mut skew = narrative::skew_follower();
    let mut lit = false;
    registration.run(FrameLoop::start(move |tick| {
        let layout = layout.get();
        let Ok(scroll_y) = dom::scroll_y() else {
            return;
        };
        let section_top = section.get_bounding_client_rect().top();
        let progress = layout.progress(section_top);
        let translate_x = layout.translate_x(progress);
        let skew_x = skew.step(velocity.sample(scroll_y, tick.now_ms), tick.dt_ms);

        let track_state = VisualState::rest().with_x(translate_x).with_skew_x(skew_x);
        if let Err(err) = apply_visual(&track, &track_state) {
            tracing::debug!(error = %err, "Ticker track write failed");
        }

        for item in items.iter_mut() {
            let metrics = layout.item_metrics(
                f64::from(item.element.offset_left()),
                f64::from(item.element.offset_width()),
                translate_x,
                section_top,
            );
            let update = item.reveal.update(metrics, tick.dt_ms);
            if update.changed || update.action.is_some() {
                if let Err(err) = item.targets.apply(&item.reveal.states()) {
                    tracing::debug!(error = %err, "Ticker item write failed");
                }
            }
        }

        let active = narrative::highlight_active(progress);
        if active != lit {
            if let Some(element) = highlight.as_ref() {
                if let Err(err) = toggle_class(element, HIGHLIGHT_CLASS, active) {
                    tracing::debug!(error = %err, "Highlight toggle failed");
                }
            }
            lit = active;
        }
    }));

    Ok(registration)
}
