//! Palette and global stylesheet.

mod colors;
mod styles;

pub use colors::{palette_css, INK};
pub use styles::GLOBAL_STYLES;
