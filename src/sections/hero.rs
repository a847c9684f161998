//! Hero section
//!
//! Entrance plays once the preloader has gone. On desktop, scrolling through
//! the hero then drives the image parallax, the text fade and the title
//! distortion continuously.

use dioxus::prelude::*;
use portfolio_core::choreography::hero::{
    self, DISTORTION_FILTER_ID, DISTORTION_MAP_ID, IMAGE_ID, IMAGE_INNER_ID, SCROLL_RANGE, SECTION_ID,
    TAGLINE_ID, TEXT_ID, TITLE_ID,
};
use portfolio_core::content::{HERO_IMAGE_URL, HERO_LINES, HERO_TAGLINE, OWNER_NAME, OWNER_ROLE};
use portfolio_core::motion::Playhead;
use portfolio_core::{PageState, Timeline};
use web_sys::{Element as DomElement, HtmlElement};

use crate::context::{use_page_state, use_site_config};
use crate::dom::{self, apply_visual, use_motion, FrameLoop, Registration, Targets};

#[component]
pub fn Hero() -> Element {
    let page = use_page_state();
    let config = use_site_config();

    use_motion("hero", move || {
        if !dom::motion_allowed(&config) {
            return Ok(Registration::new());
        }
        let entrance = match hero::entrance() {
            Ok(timeline) => timeline,
            Err(err) => {
                tracing::warn!(error = %err, "Hero entrance invalid");
                return Ok(Registration::new());
            }
        };
        let scroll = if dom::is_mobile(&config) {
            None
        } else {
            ScrollLinked::resolve()
                .inspect_err(|err| tracing::debug!(error = %err, "Hero scroll effects skipped"))
                .ok()
        };
        register(entrance, scroll, page)
    });

    rsx! {
        section { id: SECTION_ID, class: "hero",
            div { id: IMAGE_ID, class: "hero-media",
                div { id: IMAGE_INNER_ID, class: "hero-media-inner",
                    img { src: HERO_IMAGE_URL, alt: "", draggable: "false" }
                }
            }
            div { id: TEXT_ID, class: "hero-text",
                p { class: "hero-eyebrow", "{OWNER_NAME} / {OWNER_ROLE}" }
                h1 {
                    id: TITLE_ID,
                    class: "hero-title",
                    style: "filter: url(#{DISTORTION_FILTER_ID})",
                    for (index, line) in HERO_LINES.iter().enumerate() {
                        span { key: "{index}", class: "hero-line-mask",
                            span { id: hero::line_id(index), class: "hero-line", "{line}" }
                        }
                    }
                }
                p { id: TAGLINE_ID, class: "hero-tagline", "{HERO_TAGLINE}" }
            }
            span { class: "hero-scroll-cue", "aria-hidden": "true", "Scroll" }
        }
    }
}

/// Elements the continuous scroll effects write to.
struct ScrollLinked {
    section: DomElement,
    image: HtmlElement,
    text: HtmlElement,
    distortion: DomElement,
}

impl ScrollLinked {
    fn resolve() -> dom::DomResult<Self> {
        Ok(Self {
            section: dom::element(SECTION_ID)?,
            image: dom::html_element(IMAGE_INNER_ID)?,
            text: dom::html_element(TEXT_ID)?,
            distortion: dom::element(DISTORTION_MAP_ID)?,
        })
    }

    fn apply(&self, progress: f64) -> dom::DomResult<()> {
        let frame = hero::scroll_frame(progress);
        apply_visual(&self.image, &frame.image)?;
        apply_visual(&self.text, &frame.text)?;
        self.distortion
            .set_attribute("scale", &format!("{:.2}", frame.distortion))?;
        Ok(())
    }
}

fn register(entrance: Timeline, scroll: Option<ScrollLinked>, page: Signal<PageState>) -> dom::DomResult<Registration> {
    let targets = Targets::resolve(entrance.targets());
    targets.apply(&entrance.sample(0.0))?;

    let mut playhead = Playhead::new(entrance.duration());
    let mut last_progress: Option<f64> = None;
    let mut registration = Registration::new();

    registration.run(FrameLoop::start(move |tick| {
        // Entrance waits for the preloader
        if !page.peek().loading && playhead.time() == 0.0 {
            playhead.play();
        }
        if playhead.advance(tick.dt_ms) {
            if let Err(err) = targets.apply(&entrance.sample(playhead.time())) {
                tracing::debug!(error = %err, "Hero entrance write failed");
            }
        }

        let Some(scroll) = scroll.as_ref() else {
            return;
        };
        let Ok(metrics) = dom::metrics_of(&scroll.section) else {
            return;
        };
        let progress = SCROLL_RANGE.progress(metrics);
        if last_progress != Some(progress) {
            if let Err(err) = scroll.apply(progress) {
                tracing::debug!(error = %err, "Hero scroll write failed");
            }
            last_progress = Some(progress);
        }
    }));

    Ok(registration)
}
