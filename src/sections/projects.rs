//! Selected work
//!
//! Each project row rises into place once its top crosses 80% of the
//! viewport, and reverses if scrolled back above that line.

use dioxus::prelude::*;
use portfolio_core::choreography::projects::{self, SECTION_ID};
use portfolio_core::content::PROJECTS;
use portfolio_ui::ProjectCard;

use crate::context::use_site_config;
use crate::dom::{self, register_reveals, use_motion, Registration, RevealSpec};

#[component]
pub fn Projects() -> Element {
    let config = use_site_config();

    use_motion("projects", move || {
        if !dom::motion_allowed(&config) {
            return Ok(Registration::new());
        }
        let specs = (0..PROJECTS.len())
            .filter_map(|index| {
                let row_id = projects::row_id(index);
                projects::row_reveal(&row_id)
                    .inspect_err(|err| tracing::warn!(error = %err, "Project reveal invalid"))
                    .ok()
                    .map(|timeline| RevealSpec::new(row_id, projects::row_trigger(), timeline))
            })
            .collect();
        register_reveals(specs)
    });

    let count = format!("{:02}", PROJECTS.len());

    rsx! {
        section { id: SECTION_ID, class: "projects",
            header { class: "section-heading",
                span { class: "section-kicker", "(Selected work)" }
                h2 { class: "section-title", "Projects" }
                span { class: "section-count", "{count}" }
            }
            div { class: "project-list",
                for (index, entry) in PROJECTS.into_iter().enumerate() {
                    ProjectCard { key: "{entry.title}", entry, index, row_id: projects::row_id(index) }
                }
            }
        }
    }
}
