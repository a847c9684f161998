//! Project showcase card

use dioxus::prelude::*;
use portfolio_core::ProjectEntry;

use super::ArrowUpRight;

/// Properties for the ProjectCard component
#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    pub entry: ProjectEntry,
    /// Position in the list, shown as a two-digit counter
    pub index: usize,
    /// DOM id the reveal timeline targets; the image wrapper is `{row_id}-image`
    pub row_id: String,
}

/// A full-width project row linking out to the live demo.
#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let entry = props.entry;
    let row_id = &props.row_id;
    let number = format!("{:02}", props.index + 1);

    rsx! {
        article { id: "{row_id}", class: "project-row",
            a {
                class: "project-link",
                href: "{entry.link}",
                target: "_blank",
                rel: "noopener noreferrer",
                "data-cursor": "hover",
                div { class: "project-media",
                    div { id: "{row_id}-image", class: "project-image",
                        img {
                            src: "{entry.image}",
                            alt: "{entry.title}",
                            "loading": "lazy",
                        }
                    }
                }
                div { class: "project-info",
                    span { class: "project-number", "{number}" }
                    h3 { class: "project-title", "{entry.title}" }
                    span { class: "project-category", "{entry.category}" }
                    ul { class: "project-tags",
                        for tag in entry.tags.iter() {
                            li { key: "{tag}", class: "project-tag", "{tag}" }
                        }
                    }
                    span { class: "project-cta",
                        "View project"
                        ArrowUpRight {}
                    }
                }
            }
        }
    }
}
