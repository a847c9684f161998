//! Fixed site header
//!
//! Brand mark, desktop navigation and the hamburger control for the mobile
//! menu. Compacts once the page has scrolled.

use dioxus::prelude::*;
use gloo::events::EventListener;
use portfolio_core::content::OWNER_NAME;
use portfolio_core::{Anchor, NAV_ANCHORS};

use crate::components::MagneticButton;
use crate::context::use_page_state;
use crate::dom::{self, use_motion, Registration};

/// Scroll offset, px, past which the header is compacted.
const SCROLLED_THRESHOLD: f64 = 40.0;

/// Scroll to `anchor`, logging if it is not mounted.
pub fn go_to(anchor: Anchor) {
    if let Err(err) = dom::scroll_to_anchor(anchor) {
        tracing::debug!(error = %err, "Navigation target missing");
    }
}

#[component]
pub fn Header() -> Element {
    let mut page = use_page_state();
    let mut scrolled = use_signal(|| false);

    use_motion("header", move || {
        let window = dom::window()?;
        scrolled.set(dom::scroll_y()? > SCROLLED_THRESHOLD);
        let mut registration = Registration::new();
        registration.listen(EventListener::new(&window, "scroll", move |_| {
            let past = dom::scroll_y().map(|y| y > SCROLLED_THRESHOLD).unwrap_or(false);
            if *scrolled.peek() != past {
                scrolled.set(past);
            }
        }));
        Ok(registration)
    });

    let menu_open = page.read().menu_open;
    let class = if scrolled() { "site-header scrolled" } else { "site-header" };
    let toggle_label = if menu_open { "Close menu" } else { "Open menu" };

    rsx! {
        header { class: "{class}",
            button {
                class: "brand",
                r#type: "button",
                onclick: move |_| go_to(Anchor::Root),
                "{OWNER_NAME}"
            }
            nav { class: "desktop-nav", "aria-label": "Primary",
                for anchor in NAV_ANCHORS {
                    MagneticButton {
                        key: "{anchor.id()}",
                        class: "nav-link",
                        onclick: move |_: MouseEvent| go_to(anchor),
                        "{anchor.label()}"
                    }
                }
            }
            button {
                class: if menu_open { "menu-toggle is-open" } else { "menu-toggle" },
                r#type: "button",
                "aria-label": "{toggle_label}",
                "aria-expanded": "{menu_open}",
                onclick: move |_| page.write().toggle_menu(),
                span { class: "menu-toggle-bar" }
                span { class: "menu-toggle-bar" }
            }
        }
    }
}
