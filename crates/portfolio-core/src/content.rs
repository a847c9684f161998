//! Hand-authored page content.
//!
//! All lists are immutable and non-empty; the sections render them in order.

use serde::Serialize;
use serde_json::{json, Value};

pub const OWNER_NAME: &str = "Vrushal Modh";
pub const OWNER_ROLE: &str = "Creative Developer";
pub const CONTACT_EMAIL: &str = "vrushal.modh@gmail.com";
pub const REPOSITORY_URL: &str = "https://github.com/vrushalmodh";
pub const PROFILE_URL: &str = "https://www.linkedin.com/in/vrushalmodh";

/// Hero headline, one entry per revealed line.
pub const HERO_LINES: [&str; 3] = ["Crafting", "digital", "motion"];

pub const HERO_TAGLINE: &str =
    "Interfaces that feel alive: engineered for performance, choreographed for delight.";

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&w=1600&q=80";

/// A row in the services list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceEntry; 4] = [
    ServiceEntry {
        id: "01",
        name: "Creative Development",
        description: "Scroll-driven storytelling, WebGL accents and motion systems built to ship.",
    },
    ServiceEntry {
        id: "02",
        name: "Frontend Engineering",
        description: "Typed, component-driven interfaces with a focus on maintainability.",
    },
    ServiceEntry {
        id: "03",
        name: "Interaction Design",
        description: "Micro-interactions and transitions that guide attention without noise.",
    },
    ServiceEntry {
        id: "04",
        name: "Performance & Accessibility",
        description: "Fast first paint, smooth frames and experiences that respect every user.",
    },
];

/// A project in the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        title: "Lumen Atelier",
        category: "E-commerce / Motion",
        image: "https://images.unsplash.com/photo-1558655146-d09347e92766?auto=format&fit=crop&w=1200&q=80",
        tags: &["Rust", "WebAssembly", "Scroll"],
        link: "https://vrushalmodh.github.io/lumen-atelier",
    },
    ProjectEntry {
        title: "Northwind Studio",
        category: "Brand / Portfolio",
        image: "https://images.unsplash.com/photo-1541701494587-cb58502866ab?auto=format&fit=crop&w=1200&q=80",
        tags: &["Typography", "SVG", "Parallax"],
        link: "https://vrushalmodh.github.io/northwind-studio",
    },
    ProjectEntry {
        title: "Pulse Analytics",
        category: "Product / Dashboard",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=1200&q=80",
        tags: &["Data Viz", "Realtime", "Design System"],
        link: "https://vrushalmodh.github.io/pulse-analytics",
    },
];

/// Icon shown for a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Linkedin,
    Mail,
}

impl SocialIcon {
    /// Accessible label for the icon-only link
    pub fn label(&self) -> &'static str {
        match self {
            SocialIcon::Github => "GitHub",
            SocialIcon::Linkedin => "LinkedIn",
            SocialIcon::Mail => "Email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub href: &'static str,
}

impl SocialLink {
    /// `mailto:` links open the mail client in place; everything else opens a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: SocialIcon::Github,
        href: REPOSITORY_URL,
    },
    SocialLink {
        icon: SocialIcon::Linkedin,
        href: PROFILE_URL,
    },
    SocialLink {
        icon: SocialIcon::Mail,
        href: "mailto:vrushal.modh@gmail.com",
    },
];

/// Entries scrolling through the awards marquee.
pub const AWARDS: [&str; 5] = [
    "Awwwards Honorable Mention",
    "CSS Design Awards Special Kudos",
    "FWA of the Day Nominee",
    "Smashing Hackathon Winner",
    "Webby Awards Official Selection",
];

/// Seconds for one full loop of the awards marquee.
pub const AWARDS_MARQUEE_SECONDS: u32 = 30;

/// Number of identical copies rendered so the marquee loops seamlessly.
pub const MARQUEE_COPIES: usize = 2;

/// An item on the horizontally scrolling philosophy ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum NarrativeItem {
    Text(&'static str),
    /// Decorative glyph rendered inside a circular badge
    Glyph(&'static str),
    /// The item whose color shifts once the ticker passes its highlight point
    Highlight(&'static str),
}

impl NarrativeItem {
    pub fn text(&self) -> &'static str {
        match self {
            NarrativeItem::Text(s) | NarrativeItem::Glyph(s) | NarrativeItem::Highlight(s) => s,
        }
    }
}

pub const NARRATIVE: [NarrativeItem; 9] = [
    NarrativeItem::Text("Design"),
    NarrativeItem::Glyph("\u{2726}"),
    NarrativeItem::Text("is not"),
    NarrativeItem::Text("how it looks,"),
    NarrativeItem::Glyph("\u{25CF}"),
    NarrativeItem::Text("it is how it"),
    NarrativeItem::Highlight("moves"),
    NarrativeItem::Glyph("\u{2192}"),
    NarrativeItem::Text("and feels."),
];

/// JSON-LD `Person` description embedded in the page head.
pub fn structured_data() -> Value {
    let same_as: Vec<&str> = SOCIAL_LINKS
        .iter()
        .filter(|link| link.opens_new_tab())
        .map(|link| link.href)
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": OWNER_NAME,
        "jobTitle": OWNER_ROLE,
        "email": format!("mailto:{}", CONTACT_EMAIL),
        "sameAs": same_as,
        "knowsAbout": SERVICES.iter().map(|s| s.name).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn every_project_has_tags_and_absolute_link() {
        for project in &PROJECTS {
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
            assert!(project.link.starts_with("https://"));
        }
    }

    #[test]
    fn mail_link_stays_in_place() {
        let mail = SOCIAL_LINKS
            .iter()
            .find(|l| l.icon == SocialIcon::Mail)
            .unwrap();
        assert_eq!(mail.href, format!("mailto:{}", CONTACT_EMAIL));
        assert!(!mail.opens_new_tab());
    }

    #[test]
    fn single_highlight_on_ticker() {
        let highlights = NARRATIVE
            .iter()
            .filter(|item| matches!(item, NarrativeItem::Highlight(_)))
            .count();
        assert_eq!(highlights, 1);
    }

    #[test]
    fn structured_data_lists_external_profiles_only() {
        let data = structured_data();
        assert_eq!(data["@type"], "Person");
        assert_eq!(data["name"], OWNER_NAME);
        let same_as = data["sameAs"].as_array().unwrap();
        assert_eq!(same_as.len(), 2);
        assert!(same_as.iter().all(|v| v.as_str().unwrap().starts_with("https://")));
    }

    #[test]
    fn narrative_item_serializes_with_kind() {
        let value = serde_json::to_value(NarrativeItem::Highlight("moves")).unwrap();
        assert_eq!(value["kind"], "highlight");
        assert_eq!(value["value"], "moves");
    }
}
