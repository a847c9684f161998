//! Social and contact links

use dioxus::prelude::*;
use portfolio_core::SocialLink;

use super::SocialGlyph;

/// Icon links with their literal hrefs. External profiles open in a new tab;
/// `mailto:` stays in place.
#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> Element {
    rsx! {
        ul { class: "social-links",
            for link in links.iter() {
                li { key: "{link.href}",
                    if link.opens_new_tab() {
                        a {
                            class: "social-link",
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{link.icon.label()}",
                            SocialGlyph { icon: link.icon }
                        }
                    } else {
                        a {
                            class: "social-link",
                            href: "{link.href}",
                            "aria-label": "{link.icon.label()}",
                            SocialGlyph { icon: link.icon }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use portfolio_core::content::{PROFILE_URL, REPOSITORY_URL, SOCIAL_LINKS};

    use super::*;

    #[test]
    fn hrefs_are_rendered_verbatim() {
        let html = dioxus_ssr::render_element(rsx! {
            SocialLinks { links: SOCIAL_LINKS.to_vec() }
        });

        assert!(html.contains("href=\"mailto:vrushal.modh@gmail.com\""));
        assert!(html.contains(&format!("href=\"{REPOSITORY_URL}\"")));
        assert!(html.contains(&format!("href=\"{PROFILE_URL}\"")));
        assert_eq!(html.matches("class=\"social-link\"").count(), SOCIAL_LINKS.len());
    }

    #[test]
    fn only_external_links_open_new_tabs() {
        let html = dioxus_ssr::render_element(rsx! {
            SocialLinks { links: SOCIAL_LINKS.to_vec() }
        });
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    }
}
