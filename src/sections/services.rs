//! Services section
//!
//! Numbered rows that slide up as they scroll into view and slide back out
//! when scrolled above again.

use dioxus::prelude::*;
use portfolio_core::choreography::services::{self, SECTION_ID};
use portfolio_core::content::SERVICES;
use portfolio_ui::ServiceRow;

use crate::context::use_site_config;
use crate::dom::{self, register_reveals, use_motion, Registration, RevealSpec};

#[component]
pub fn Services() -> Element {
    let config = use_site_config();

    use_motion("services", move || {
        if !dom::motion_allowed(&config) {
            return Ok(Registration::new());
        }
        let mut specs = Vec::with_capacity(SERVICES.len());
        for entry in SERVICES.iter() {
            let row_id = services::row_id(entry);
            match services::row_reveal(&row_id) {
                Ok(timeline) => specs.push(RevealSpec::new(row_id, services::row_trigger(), timeline)),
                Err(err) => tracing::warn!(error = %err, "Service reveal invalid"),
            }
        }
        register_reveals(specs)
    });

    rsx! {
        section { id: SECTION_ID, class: "services",
            header { class: "section-heading",
                span { class: "section-kicker", "(Process)" }
                h2 { class: "section-title", "What I do" }
            }
            div { class: "service-list",
                for entry in SERVICES {
                    ServiceRow { key: "{entry.id}", entry, row_id: services::row_id(&entry) }
                }
            }
        }
    }
}
