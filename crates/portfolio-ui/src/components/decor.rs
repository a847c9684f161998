//! Decorative visual primitives
//!
//! Static layers with no behavior:
//! - Noise: fixed film-grain overlay above everything
//! - Blobs: blurred gradient orbs drifting behind the content
//! - Grid: faint column guides
//! - Distortion filter: SVG filter definition the hero title references

use dioxus::prelude::*;
use portfolio_core::choreography::hero::{DISTORTION_FILTER_ID, DISTORTION_MAP_ID};

/// Film grain overlay.
///
/// The grain itself comes from a `feTurbulence` data URI in the stylesheet;
/// this element only positions it.
#[component]
pub fn NoiseOverlay() -> Element {
    rsx! {
        div { class: "noise-overlay", "aria-hidden": "true" }
    }
}

/// Properties for the GradientBlobs component
#[derive(Clone, PartialEq, Props)]
pub struct GradientBlobsProps {
    /// Number of orbs (default: 3)
    #[props(default = 3)]
    pub count: usize,
}

/// Blurred gradient orbs drifting slowly behind the page.
///
/// Each orb gets its own `--blob-index` so the stylesheet can offset the
/// drift animation and hue.
#[component]
pub fn GradientBlobs(props: GradientBlobsProps) -> Element {
    rsx! {
        div { class: "gradient-blobs", "aria-hidden": "true",
            for index in 0..props.count {
                span {
                    key: "{index}",
                    class: "gradient-blob",
                    style: "--blob-index: {index}",
                }
            }
        }
    }
}

/// Properties for the GridBackground component
#[derive(Clone, PartialEq, Props)]
pub struct GridBackgroundProps {
    /// Number of columns (default: 12)
    #[props(default = 12)]
    pub columns: usize,
}

/// Faint vertical column guides spanning the viewport.
#[component]
pub fn GridBackground(props: GridBackgroundProps) -> Element {
    rsx! {
        div {
            class: "grid-background",
            style: "--grid-columns: {props.columns}",
            "aria-hidden": "true",
            for index in 0..props.columns {
                span { key: "{index}", class: "grid-column" }
            }
        }
    }
}

/// Markup of the distortion filter. The displacement map starts at scale 0
/// (no distortion); the hero raises it with scroll.
pub fn distortion_filter_markup() -> String {
    format!(
        r#"<defs><filter id="{DISTORTION_FILTER_ID}" x="-20%" y="-20%" width="140%" height="140%"><feTurbulence type="fractalNoise" baseFrequency="0.012 0.04" numOctaves="2" seed="3" result="noise"/><feDisplacementMap id="{DISTORTION_MAP_ID}" in="SourceGraphic" in2="noise" scale="0" xChannelSelector="R" yChannelSelector="G"/></filter></defs>"#
    )
}

/// Zero-size SVG holding the hero's distortion filter definition.
#[component]
pub fn DistortionFilter() -> Element {
    let markup = distortion_filter_markup();
    rsx! {
        svg {
            class: "svg-defs",
            width: "0",
            height: "0",
            "aria-hidden": "true",
            dangerous_inner_html: "{markup}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_ids_match_hero_choreography() {
        let markup = distortion_filter_markup();
        assert!(markup.contains(r#"<filter id="hero-distortion""#));
        assert!(markup.contains(r#"<feDisplacementMap id="hero-distortion-map""#));
        assert!(markup.contains(r#"scale="0""#));
    }

    #[test]
    fn grid_renders_requested_columns() {
        let html = dioxus_ssr::render_element(rsx! {
            GridBackground { columns: 4 }
        });
        assert_eq!(html.matches("class=\"grid-column\"").count(), 4);
    }

    #[test]
    fn blobs_default_to_three() {
        let html = dioxus_ssr::render_element(rsx! {
            GradientBlobs {}
        });
        assert_eq!(html.matches("class=\"gradient-blob\"").count(), 3);
    }
}
