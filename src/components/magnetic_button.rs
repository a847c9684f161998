//! Magnetic Button
//!
//! A clickable control whose content drifts toward the pointer while it is
//! hovered and eases back when the pointer leaves. Renders an `<a>` when given
//! an `href`, otherwise a `<button>`.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use gloo::events::EventListener;
use portfolio_core::{MagneticState, Vec2, VisualState};
use wasm_bindgen::JsCast;

use crate::context::use_site_config;
use crate::dom::{self, apply_visual, use_motion, FrameLoop, Registration};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Props, Clone, PartialEq)]
pub struct MagneticButtonProps {
    pub children: Element,
    /// Link target; renders an anchor instead of a button
    #[props(default)]
    pub href: Option<String>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub class: String,
    #[props(default)]
    pub aria_label: Option<String>,
    /// Turn the pull effect off for this control
    #[props(default = true)]
    pub magnetic: bool,
}

#[component]
pub fn MagneticButton(props: MagneticButtonProps) -> Element {
    let config = use_site_config();
    let id = use_hook(|| format!("magnetic-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)));
    let inner_id = format!("{id}-inner");

    let enabled = props.magnetic && config.magnetic_enabled;
    let setup_id = id.clone();
    use_motion("magnetic-button", move || {
        if !enabled || !dom::motion_allowed(&config) {
            return Ok(Registration::new());
        }
        attach(&setup_id, config.magnetic_strength, config.magnetic_smoothing)
    });

    let class = format!("magnetic {}", props.class);
    let onclick = move |evt: MouseEvent| {
        if let Some(handler) = props.onclick {
            handler.call(evt);
        }
    };

    match props.href {
        Some(href) => {
            let external = href.starts_with("http");
            rsx! {
                a {
                    id: "{id}",
                    class: "{class}",
                    href: "{href}",
                    target: if external { "_blank" },
                    rel: if external { "noopener noreferrer" },
                    "aria-label": props.aria_label,
                    onclick,
                    span { id: "{inner_id}", class: "magnetic-inner", {props.children} }
                }
            }
        }
        None => rsx! {
            button {
                id: "{id}",
                r#type: "button",
                class: "{class}",
                "aria-label": props.aria_label,
                onclick,
                span { id: "{inner_id}", class: "magnetic-inner", {props.children} }
            }
        },
    }
}

/// Pointer listeners on the control plus a frame loop that eases the inner
/// span toward the magnetic target.
fn attach(id: &str, strength: f64, smoothing: f64) -> dom::DomResult<Registration> {
    let control = dom::element(id)?;
    let inner = dom::html_element(&format!("{id}-inner"))?;
    let state = match MagneticState::new(strength, smoothing, true) {
        Ok(state) => Rc::new(RefCell::new(state)),
        Err(err) => {
            tracing::warn!(error = %err, "Invalid magnetic configuration");
            return Ok(Registration::new());
        }
    };

    let mut registration = Registration::new();

    let move_state = Rc::clone(&state);
    let move_target = control.clone();
    registration.listen(EventListener::new(&control, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() {
            let pointer = Vec2::new(f64::from(event.client_x()), f64::from(event.client_y()));
            move_state
                .borrow_mut()
                .pointer_moved(pointer, dom::rect_of(&move_target));
        }
    }));

    let leave_state = Rc::clone(&state);
    registration.listen(EventListener::new(&control, "mouseleave", move |_| {
        leave_state.borrow_mut().pointer_left();
    }));

    registration.run(FrameLoop::start(move |tick| {
        let Some(offset) = state.borrow_mut().frame(tick.dt_ms) else {
            return;
        };
        let visual = VisualState::rest().with_x(offset.x).with_y(offset.y);
        if let Err(err) = apply_visual(&inner, &visual) {
            tracing::debug!(error = %err, "Magnetic style write failed");
        }
    }));

    Ok(registration)
}
