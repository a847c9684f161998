//! Per-frame callback loop on top of `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use portfolio_core::motion::FRAME_MS;

/// Timing handed to each frame callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// High resolution timestamp of this frame, ms
    pub now_ms: f64,
    /// Time since the previous frame, ms. The first frame reports one
    /// nominal 60Hz frame.
    pub dt_ms: f64,
}

type Slot = Rc<RefCell<Option<AnimationFrame>>>;

/// Runs a callback every animation frame until dropped.
pub struct FrameLoop {
    slot: Slot,
    alive: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start<F>(callback: F) -> Self
    where
        F: FnMut(FrameTick) + 'static,
    {
        let slot: Slot = Rc::new(RefCell::new(None));
        let alive = Rc::new(Cell::new(true));
        schedule(
            Rc::clone(&slot),
            Rc::clone(&alive),
            Rc::new(RefCell::new(callback)),
            None,
        );
        Self { slot, alive }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        // Dropping the pending frame cancels it; the flag stops a callback
        // that is mid-flight from scheduling another.
        self.alive.set(false);
        self.slot.borrow_mut().take();
    }
}

fn schedule<F>(slot: Slot, alive: Rc<Cell<bool>>, callback: Rc<RefCell<F>>, last: Option<f64>)
where
    F: FnMut(FrameTick) + 'static,
{
    if !alive.get() {
        return;
    }
    let next_slot = Rc::clone(&slot);
    let handle = request_animation_frame(move |now_ms| {
        next_slot.borrow_mut().take();
        let dt_ms = last.map(|last| now_ms - last).unwrap_or(FRAME_MS);
        (callback.borrow_mut())(FrameTick { now_ms, dt_ms });
        schedule(next_slot, alive, callback, Some(now_ms));
    });
    *slot.borrow_mut() = Some(handle);
}
