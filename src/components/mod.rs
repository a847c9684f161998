//! Interactive components.
//!
//! These attach browser listeners and frame loops; purely presentational
//! pieces live in `portfolio_ui`.

mod custom_cursor;
pub mod header;
mod magnetic_button;
mod mobile_menu;
mod preloader;

pub use custom_cursor::CustomCursor;
pub use header::Header;
pub use magnetic_button::MagneticButton;
pub use mobile_menu::MobileMenu;
pub use preloader::Preloader;
