//! Writing visual state back to elements.

use std::collections::HashMap;

use portfolio_core::VisualState;
use web_sys::{Element, HtmlElement};

use super::{html_element, DomResult};

/// Write every animated property of `state` to the element's inline style.
pub fn apply_visual(element: &HtmlElement, state: &VisualState) -> DomResult<()> {
    let style = element.style();
    style.set_property("transform", &state.transform_css())?;
    style.set_property("opacity", &state.opacity_css())?;
    style.set_property("filter", &state.filter_css())?;
    style.set_property("clip-path", &state.clip_css())?;
    Ok(())
}

pub fn toggle_class(element: &Element, class: &str, on: bool) -> DomResult<()> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Resolved elements for a set of timeline targets.
pub struct Targets {
    elements: HashMap<String, HtmlElement>,
}

impl Targets {
    /// Look up every id. Ids that are not mounted are skipped so the rest of
    /// the timeline still plays.
    pub fn resolve<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut elements = HashMap::new();
        for id in ids {
            let id = id.as_ref();
            match html_element(id) {
                Ok(element) => {
                    elements.insert(id.to_string(), element);
                }
                Err(err) => tracing::debug!(error = %err, "Skipping animation target"),
            }
        }
        Self { elements }
    }

    pub fn apply(&self, states: &[(&str, VisualState)]) -> DomResult<()> {
        for (id, state) in states {
            if let Some(element) = self.elements.get(*id) {
                apply_visual(element, state)?;
            }
        }
        Ok(())
    }
}
