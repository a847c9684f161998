//! Custom Cursor
//!
//! A dot pinned to the pointer and a ring that trails it. Only attaches on
//! fine pointers; on touch devices nothing is registered and the markers stay
//! hidden.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo::events::EventListener;
use portfolio_core::cursor::INTERACTIVE_SELECTOR;
use portfolio_core::{CursorFrame, CursorState, Vec2, VisualState};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::context::use_site_config;
use crate::dom::{self, apply_visual, toggle_class, use_motion, FrameLoop, Registration};

const DOT_ID: &str = "cursor-dot";
const RING_ID: &str = "cursor-ring";
const BODY_CLASS: &str = "has-custom-cursor";

#[component]
pub fn CustomCursor() -> Element {
    let config = use_site_config();

    use_motion("custom-cursor", move || {
        let pointer = dom::pointer_kind();
        if !pointer.tracks_cursor() || !dom::motion_allowed(&config) {
            tracing::debug!(?pointer, "Custom cursor inactive");
            return Ok(Registration::new());
        }
        attach(config.cursor_smoothing)
    });

    rsx! {
        div { id: DOT_ID, class: "cursor-dot", "aria-hidden": "true" }
        div { id: RING_ID, class: "cursor-ring", "aria-hidden": "true" }
    }
}

fn attach(smoothing: f64) -> dom::DomResult<Registration> {
    let window = dom::window()?;
    let body: web_sys::Element = dom::document()?.body().ok_or(dom::DomError::NoDocument)?.into();
    let dot = dom::html_element(DOT_ID)?;
    let ring = dom::html_element(RING_ID)?;
    let state = match CursorState::new(smoothing) {
        Ok(state) => Rc::new(RefCell::new(state)),
        Err(err) => {
            tracing::warn!(error = %err, "Invalid cursor configuration");
            return Ok(Registration::new());
        }
    };

    let mut registration = Registration::new();

    toggle_class(&body, BODY_CLASS, true)?;
    registration.on_drop(move || {
        if let Err(err) = toggle_class(&body, BODY_CLASS, false) {
            tracing::debug!(error = %err, "Cursor cleanup failed");
        }
    });

    let move_state = Rc::clone(&state);
    registration.listen(EventListener::new(&window, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() else {
            return;
        };
        let position = Vec2::new(f64::from(event.client_x()), f64::from(event.client_y()));
        let over_interactive = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
            .is_some();
        move_state.borrow_mut().pointer_moved(position, over_interactive);
    }));

    let mut last: Option<CursorFrame> = None;
    registration.run(FrameLoop::start(move |tick| {
        let frame = state.borrow_mut().frame(tick.dt_ms);
        if last == Some(frame) {
            return;
        }
        if let Err(err) = draw(&dot, &ring, &frame) {
            tracing::debug!(error = %err, "Cursor style write failed");
        }
        last = Some(frame);
    }));

    tracing::info!("Custom cursor attached");
    Ok(registration)
}

fn draw(dot: &HtmlElement, ring: &HtmlElement, frame: &CursorFrame) -> dom::DomResult<()> {
    let centered = VisualState::rest().with_x_percent(-50.0).with_y_percent(-50.0);
    apply_visual(
        dot,
        &centered
            .with_x(frame.dot.x)
            .with_y(frame.dot.y)
            .with_scale(frame.dot_scale),
    )?;
    apply_visual(
        ring,
        &centered
            .with_x(frame.ring.x)
            .with_y(frame.ring.y)
            .with_scale(frame.ring_scale),
    )?;
    ring.style().set_property("mix-blend-mode", frame.ring_blend.css())?;
    Ok(())
}
