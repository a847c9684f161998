//! Reusable presentational components.
//!
//! Decorative primitives are mounted once by the page; content components
//! render one entry of the static content lists each.

mod awards_marquee;
mod decor;
mod icons;
mod project_card;
mod service_row;
mod social_links;

pub use awards_marquee::*;
pub use decor::*;
pub use icons::*;
pub use project_card::*;
pub use service_row::*;
pub use social_links::*;
