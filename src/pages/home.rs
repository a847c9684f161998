//! Home page - the whole portfolio.
//!
//! Mounts the decorative layers and the cursor once, the preloader while
//! loading, the fixed header and (when open) the mobile menu, then the
//! sections in scroll order.

use dioxus::prelude::*;
use portfolio_core::Anchor;
use portfolio_ui::{DistortionFilter, GradientBlobs, GridBackground, NoiseOverlay};

use crate::components::{CustomCursor, Header, MobileMenu, Preloader};
use crate::context::use_page_state;
use crate::sections::{Awards, Contact, Hero, Narrative, Projects, Services};

#[component]
pub fn Home() -> Element {
    let mut page = use_page_state();
    let state = page();

    rsx! {
        DistortionFilter {}
        GridBackground {}
        GradientBlobs {}
        NoiseOverlay {}
        CustomCursor {}

        if state.loading {
            Preloader {
                on_complete: move |_| page.write().finish_loading(),
            }
        }

        Header {}
        if state.menu_open {
            MobileMenu {}
        }

        main {
            id: Anchor::Root.id(),
            class: if state.loading { "page is-loading" } else { "page" },
            Hero {}
            Services {}
            Narrative {}
            Projects {}
            Awards {}
            Contact {}
        }
    }
}
