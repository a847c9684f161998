//! Mobile Menu
//!
//! Full-screen navigation overlay, mounted while the menu flag is set.
//! Choosing an entry closes the menu and scrolls to the section. The header
//! stacks above the overlay so its toggle can close it. Escape also
//! closes it, and page scrolling is locked while it is open.

use dioxus::prelude::*;
use gloo::events::EventListener;
use portfolio_core::content::{CONTACT_EMAIL, SOCIAL_LINKS};
use portfolio_core::MOBILE_NAV_ANCHORS;
use portfolio_ui::SocialLinks;
use wasm_bindgen::JsCast;

use crate::components::header::go_to;
use crate::context::use_page_state;
use crate::dom::{self, use_motion, Registration};

#[component]
pub fn MobileMenu() -> Element {
    let mut page = use_page_state();

    use_motion("mobile-menu", move || {
        let document = dom::document()?;
        dom::set_scroll_locked(true)?;
        let mut registration = Registration::new();
        registration.on_drop(|| {
            if let Err(err) = dom::set_scroll_locked(false) {
                tracing::debug!(error = %err, "Scroll unlock failed");
            }
        });
        registration.listen(EventListener::new(&document, "keydown", move |event| {
            let escape = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|event| event.key() == "Escape");
            if escape {
                page.write().close_menu();
            }
        }));
        Ok(registration)
    });

    rsx! {
        div { class: "mobile-menu", role: "dialog", "aria-modal": "true", "aria-label": "Navigation",
            nav { class: "mobile-menu-nav",
                for (index, anchor) in MOBILE_NAV_ANCHORS.into_iter().enumerate() {
                    button {
                        key: "{anchor.id()}",
                        class: "mobile-menu-link",
                        r#type: "button",
                        style: "--item-index: {index}",
                        onclick: move |_| {
                            let target = page.write().navigate(anchor);
                            if let Err(err) = dom::set_scroll_locked(false) {
                                tracing::debug!(error = %err, "Scroll unlock failed");
                            }
                            go_to(target);
                        },
                        "{anchor.label()}"
                    }
                }
            }
            div { class: "mobile-menu-footer",
                a { class: "mobile-menu-email", href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                SocialLinks { links: SOCIAL_LINKS.to_vec() }
            }
        }
    }
}
