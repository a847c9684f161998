//! Recognition strip

use dioxus::prelude::*;
use portfolio_core::content::{AWARDS, AWARDS_MARQUEE_SECONDS};
use portfolio_ui::AwardsMarquee;

#[component]
pub fn Awards() -> Element {
    rsx! {
        section { class: "awards", "aria-label": "Awards and recognition",
            AwardsMarquee { items: AWARDS.to_vec(), seconds: AWARDS_MARQUEE_SECONDS }
        }
    }
}
