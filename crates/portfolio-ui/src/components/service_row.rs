//! Service list row

use dioxus::prelude::*;
use portfolio_core::ServiceEntry;

/// Properties for the ServiceRow component
#[derive(Clone, PartialEq, Props)]
pub struct ServiceRowProps {
    pub entry: ServiceEntry,
    /// DOM id the reveal timeline targets; the divider rule is `{row_id}-rule`
    pub row_id: String,
}

/// One numbered row of the services list.
#[component]
pub fn ServiceRow(props: ServiceRowProps) -> Element {
    let entry = props.entry;
    let row_id = &props.row_id;

    rsx! {
        article {
            id: "{row_id}",
            class: "service-row",
            "data-cursor": "hover",
            div { class: "service-rule-track",
                span { id: "{row_id}-rule", class: "service-rule" }
            }
            span { class: "service-index", "{entry.id}" }
            h3 { class: "service-name", "{entry.name}" }
            p { class: "service-description", "{entry.description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use portfolio_core::content::SERVICES;

    use super::*;

    #[test]
    fn renders_every_service_once() {
        let html = dioxus_ssr::render_element(rsx! {
            for entry in SERVICES {
                ServiceRow { key: "{entry.id}", entry, row_id: format!("service-row-{}", entry.id) }
            }
        });

        for entry in &SERVICES {
            let name = entry.name.replace('&', "&amp;");
            assert_eq!(html.matches(name.as_str()).count(), 1, "{}", entry.name);
            assert_eq!(html.matches(entry.description).count(), 1);
            assert!(html.contains(&format!("id=\"service-row-{}-rule\"", entry.id)));
        }
    }
}
