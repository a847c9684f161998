//! Per-section animation presets.
//!
//! Each preset builds timelines whose targets are DOM ids, so the browser
//! layer can write sampled states straight back by id.

pub mod hero;
pub mod narrative;
pub mod projects;
pub mod services;
