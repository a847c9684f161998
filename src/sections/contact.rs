//! Contact footer

use dioxus::prelude::*;
use portfolio_core::content::{CONTACT_EMAIL, OWNER_NAME, SOCIAL_LINKS};
use portfolio_core::Anchor;
use portfolio_ui::{ArrowUpRight, SocialLinks};

use crate::components::MagneticButton;

#[component]
pub fn Contact() -> Element {
    rsx! {
        footer { id: Anchor::Contact.id(), class: "contact",
            span { class: "section-kicker", "(Contact)" }
            h2 { class: "contact-title",
                span { "Let's build" }
                span { class: "contact-title-accent", "something that moves." }
            }
            MagneticButton {
                href: format!("mailto:{CONTACT_EMAIL}"),
                class: "contact-cta",
                aria_label: format!("Email {CONTACT_EMAIL}"),
                span { "{CONTACT_EMAIL}" }
                ArrowUpRight { size: 28 }
            }
            div { class: "contact-footer",
                SocialLinks { links: SOCIAL_LINKS.to_vec() }
                span { class: "contact-credit", "\u{a9} {OWNER_NAME}" }
            }
        }
    }
}
