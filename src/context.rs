//! Page-wide context.
//!
//! [`App`](crate::app::App) provides the page state signal and the site
//! configuration; components read them with the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let mut page = use_page_state();
//! page.write().toggle_menu();
//!
//! let config = use_site_config();
//! let mobile = dom::is_mobile(&config);
//! ```

use dioxus::prelude::*;
use portfolio_core::{PageState, SiteConfig};

/// Provide the page-wide context. Called once from the root component.
pub fn provide_page_context(config: SiteConfig) -> Signal<PageState> {
    use_context_provider(|| config);
    use_context_provider(|| Signal::new(PageState::default()))
}

/// Loading and menu flags.
pub fn use_page_state() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
