use dioxus::prelude::*;
use portfolio_core::content::{structured_data, HERO_TAGLINE, OWNER_NAME, OWNER_ROLE};
use portfolio_core::SiteConfig;

use crate::context::provide_page_context;
use crate::pages::Home;
use crate::theme::{palette_css, GLOBAL_STYLES, INK};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Anton&family=Inter:wght@400;500&display=swap";

/// Application routes.
///
/// - `/` - the portfolio
/// - anything else - redirected to `/`
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Unknown paths land back on the portfolio.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        tracing::info!(path = %segments.join("/"), "Unknown route, redirecting home");
        navigator.replace(Route::Home {});
    });
    rsx! {}
}

/// Root application component.
///
/// Provides global styles, page context, head metadata and routing.
#[component]
pub fn App() -> Element {
    provide_page_context(SiteConfig::default());

    let title = format!("{OWNER_NAME} | {OWNER_ROLE}");
    let palette = palette_css();
    let json_ld = serde_json::to_string(&structured_data()).unwrap_or_default();

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: HERO_TAGLINE }
        document::Meta { name: "theme-color", content: INK }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: FONTS_URL }
        style { {palette} }
        style { {GLOBAL_STYLES} }
        script { r#type: "application/ld+json", dangerous_inner_html: "{json_ld}" }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn root_path_is_home() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::Home {}));
    }

    #[test]
    fn unknown_paths_are_caught() {
        let route = Route::from_str("/old/blog-post").ok();
        assert!(matches!(route, Some(Route::NotFound { .. })));
    }
}
