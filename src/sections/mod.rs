//! Page sections, in scroll order.
//!
//! Each section registers its own motion on mount against ids inside its own
//! subtree, so sections never depend on one another.

mod awards;
mod contact;
mod hero;
mod narrative;
mod projects;
mod services;

pub use awards::Awards;
pub use contact::Contact;
pub use hero::Hero;
pub use narrative::Narrative;
pub use projects::Projects;
pub use services::Services;
