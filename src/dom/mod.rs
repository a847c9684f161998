//! Browser glue.
//!
//! Thin wrappers over `web-sys` and `gloo` used by the animated components:
//! element lookup, geometry, scrolling, media queries, style writes and the
//! per-frame loop. Core motion state lives in `portfolio_core`; this module
//! only reads inputs from the page and writes outputs back.
//!
//! Lookups return [`DomResult`]. Callers registering motion treat an error as
//! "effect not available" and skip it.

mod frame;
mod media;
mod registration;
mod reveal;
mod style;

use portfolio_core::magnetic::Rect;
use portfolio_core::motion::ElementMetrics;
use portfolio_core::Anchor;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

pub use frame::FrameLoop;
pub use media::{is_mobile, motion_allowed, pointer_kind};
pub use registration::{use_motion, Registration};
pub use reveal::{register_reveals, RevealSpec};
pub use style::{apply_visual, toggle_class, Targets};

/// Errors from DOM access
#[derive(Error, Debug)]
pub enum DomError {
    /// Not running in a browser window
    #[error("No window available")]
    NoWindow,

    /// Window has no document
    #[error("No document available")]
    NoDocument,

    /// No element with the given id is mounted
    #[error("Element not found: #{0}")]
    MissingElement(String),

    /// Element exists but is not an HTML element (e.g. SVG)
    #[error("Element #{0} is not an HTML element")]
    NotHtmlElement(String),

    /// A browser API call threw
    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Result type alias for DOM access
pub type DomResult<T> = Result<T, DomError>;

pub fn window() -> DomResult<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> DomResult<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Any element by id, including SVG nodes.
pub fn element(id: &str) -> DomResult<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// An HTML element by id.
pub fn html_element(id: &str) -> DomResult<HtmlElement> {
    element(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::NotHtmlElement(id.to_string()))
}

/// Viewport width and height in CSS px.
pub fn viewport_size() -> DomResult<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

pub fn scroll_y() -> DomResult<f64> {
    Ok(window()?.scroll_y()?)
}

/// Geometry of `element` relative to the viewport.
pub fn metrics_of(element: &Element) -> DomResult<ElementMetrics> {
    let rect = element.get_bounding_client_rect();
    let (_, viewport_height) = viewport_size()?;
    Ok(ElementMetrics {
        top: rect.top(),
        height: rect.height(),
        viewport_height,
    })
}

pub fn rect_of(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Smoothly scroll the anchor's element to the top of the viewport.
pub fn scroll_to_anchor(anchor: Anchor) -> DomResult<()> {
    let target = element(anchor.id())?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    tracing::debug!(anchor = %anchor.id(), "Scrolled to anchor");
    Ok(())
}

/// Lock or restore page scrolling (used while the mobile menu is open).
pub fn set_scroll_locked(locked: bool) -> DomResult<()> {
    let body = document()?.body().ok_or(DomError::NoDocument)?;
    if locked {
        body.style().set_property("overflow", "hidden")?;
    } else {
        body.style().remove_property("overflow")?;
    }
    Ok(())
}
