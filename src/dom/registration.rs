//! Lifetime management for listeners and frame loops.

use dioxus::prelude::*;
use gloo::events::EventListener;

use super::{DomResult, FrameLoop};

/// Everything one component attached to the page. Dropping it removes the
/// listeners, cancels the frame loop and runs cleanup hooks.
#[derive(Default)]
pub struct Registration {
    listeners: Vec<EventListener>,
    frames: Vec<FrameLoop>,
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, listener: EventListener) -> &mut Self {
        self.listeners.push(listener);
        self
    }

    pub fn run(&mut self, frame: FrameLoop) -> &mut Self {
        self.frames.push(frame);
        self
    }

    /// Run `cleanup` when the registration is dropped.
    pub fn on_drop(&mut self, cleanup: impl FnOnce() + 'static) -> &mut Self {
        self.cleanups.push(Box::new(cleanup));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty() && self.frames.is_empty() && self.cleanups.is_empty()
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.frames.clear();
        self.listeners.clear();
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
    }
}

/// Run `setup` once after mount and keep what it registers alive for the
/// lifetime of the calling component.
///
/// Setup errors mean a referenced element or browser API is unavailable;
/// they are logged at debug level and the effect is skipped.
///
/// `setup` must not subscribe to signals (use `peek`), or the effect would
/// re-run and register twice.
pub fn use_motion<F>(label: &'static str, mut setup: F)
where
    F: FnMut() -> DomResult<Registration> + 'static,
{
    let mut slot: Signal<Option<Registration>> = use_signal(|| None);

    use_effect(move || match setup() {
        Ok(registration) => {
            if registration.is_empty() {
                tracing::debug!(component = label, "No motion registered");
            } else {
                tracing::info!(component = label, "Motion registered");
            }
            slot.set(Some(registration));
        }
        Err(err) => {
            tracing::debug!(component = label, error = %err, "Motion setup skipped");
        }
    });
}
