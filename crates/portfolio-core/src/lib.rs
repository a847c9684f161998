//! Portfolio Core Library
//!
//! Browser-free logic behind the portfolio site.
//!
//! ## Overview
//!
//! The site is a single scrolling page whose sections animate against scroll
//! and pointer position. Everything that can be expressed without a DOM lives
//! here so it can be tested natively:
//!
//! - **content**: the hand-authored services, projects, links and copy
//! - **motion**: easing, visual states, timelines, playheads, scroll ranges,
//!   smoothing and scroll velocity
//! - **cursor** / **magnetic**: pointer-following state for the custom cursor
//!   and magnetic buttons
//! - **preloader** / **page**: the two transient UI flags and the timing that
//!   drives them
//! - **choreography**: the concrete timelines each section registers
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::motion::{ElementMetrics, ScrollReveal};
//! use portfolio_core::choreography::services;
//!
//! let mut reveal = ScrollReveal::new(services::row_trigger(), services::row_reveal("row").unwrap());
//!
//! // Row sits below the fold: nothing plays yet.
//! let below = ElementMetrics { top: 900.0, height: 120.0, viewport_height: 800.0 };
//! assert!(!reveal.update(below, 16.0).is_playing());
//! ```

pub mod choreography;
pub mod config;
pub mod content;
pub mod cursor;
pub mod error;
pub mod magnetic;
pub mod motion;
pub mod page;
pub mod preloader;

// Re-exports
pub use config::SiteConfig;
pub use content::{ProjectEntry, ServiceEntry, SocialIcon, SocialLink};
pub use cursor::{BlendMode, CursorFrame, CursorState, PointerKind};
pub use error::MotionError;
pub use magnetic::MagneticState;
pub use motion::{Ease, Timeline, TimelineBuilder, Vec2, VisualState};
pub use page::{Anchor, PageState, MOBILE_NAV_ANCHORS, NAV_ANCHORS};
pub use preloader::PreloaderPhase;
