//! Media query checks.

use portfolio_core::{PointerKind, SiteConfig};

use super::window;

/// Whether `query` currently matches. Unsupported queries and a missing
/// window count as no match.
pub fn matches_media(query: &str) -> bool {
    window()
        .ok()
        .and_then(|window| window.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn pointer_kind() -> PointerKind {
    PointerKind::from_fine_match(matches_media("(pointer: fine)"))
}

pub fn is_mobile(config: &SiteConfig) -> bool {
    matches_media(&config.mobile_media_query())
}

/// Motion is allowed unless the user asked for reduced motion and the site
/// honours it.
pub fn motion_allowed(config: &SiteConfig) -> bool {
    config.motion_allowed(matches_media("(prefers-reduced-motion: reduce)"))
}
