//! Awards marquee
//!
//! Time-driven, infinite horizontal scroll. The content is rendered
//! [`MARQUEE_COPIES`] times and a CSS keyframe translates the track by
//! `-100% / copies`, so the loop point is invisible. No scroll linkage.

use dioxus::prelude::*;
use portfolio_core::content::MARQUEE_COPIES;

/// Properties for the AwardsMarquee component
#[derive(Clone, PartialEq, Props)]
pub struct AwardsMarqueeProps {
    pub items: Vec<&'static str>,
    /// Seconds per loop
    #[props(default = 30)]
    pub seconds: u32,
}

#[component]
pub fn AwardsMarquee(props: AwardsMarqueeProps) -> Element {
    rsx! {
        div { class: "marquee", role: "marquee",
            div {
                class: "marquee-track",
                style: "--marquee-duration: {props.seconds}s; --marquee-copies: {MARQUEE_COPIES}",
                for copy in 0..MARQUEE_COPIES {
                    ul {
                        key: "{copy}",
                        class: "marquee-group",
                        // Only the first copy is announced
                        "aria-hidden": if copy > 0 { "true" } else { "false" },
                        for item in props.items.iter() {
                            li { key: "{item}", class: "marquee-item",
                                span { class: "marquee-star", "\u{2726}" }
                                "{item}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use portfolio_core::content::AWARDS;

    use super::*;

    #[test]
    fn content_is_duplicated_for_seamless_loop() {
        let html = dioxus_ssr::render_element(rsx! {
            AwardsMarquee { items: AWARDS.to_vec() }
        });
        for award in AWARDS {
            assert_eq!(html.matches(award).count(), MARQUEE_COPIES, "{award}");
        }
        assert_eq!(html.matches("aria-hidden=\"true\"").count(), MARQUEE_COPIES - 1);
    }

    #[test]
    fn duration_is_configurable() {
        let html = dioxus_ssr::render_element(rsx! {
            AwardsMarquee { items: AWARDS.to_vec(), seconds: 12 }
        });
        assert!(html.contains("--marquee-duration: 12s"));
    }
}
