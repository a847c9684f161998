//! Portfolio UI Components
//!
//! Presentational Dioxus components for the portfolio page. Nothing in this
//! crate touches the browser: components render markup and DOM ids, and the
//! app layer attaches motion to those ids.
//!
//! ## Visual Language
//!
//! - **Ink (#0b0b0c)**: page background
//! - **Bone (#ece8e1)**: primary text
//! - **Ember (#ff5a1f)**: accents, hover states, the highlighted ticker word
//! - **Grain**: a fixed noise overlay softens flat color everywhere
//!
//! Display type is set in a condensed grotesk; body copy in a neutral sans.

pub mod components;

pub use components::*;
