use std::cell::RefCell;
use std::rc::Rc;

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::TickCallbackId;

/// Cancellation handle for a running frame loop.
///
/// Cancellation is synchronous: once `cancel` returns the underlying tick
/// source is removed and the loop's callback will not run again. Cancelling
/// an already-finished loop is a no-op.
pub struct FrameLoopHandle {
    id: Rc<RefCell<Option<TickCallbackId>>>,
}

impl FrameLoopHandle {
    pub fn cancel(&self) {
        if let Some(id) = self.id.borrow_mut().take() {
            id.remove();
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.borrow().is_some()
    }
}

/// Registers `on_frame` with the widget's frame clock and returns a handle
/// to it. The callback runs once per display frame until it returns
/// `ControlFlow::Break` or the handle is cancelled. To stop the loop from
/// inside the callback, return `Break` rather than cancelling the handle.
pub fn start_frame_loop<W, F>(widget: &W, on_frame: F) -> FrameLoopHandle
where
    W: IsA<gtk4::Widget>,
    F: Fn() -> glib::ControlFlow + 'static,
{
    let slot: Rc<RefCell<Option<TickCallbackId>>> = Rc::new(RefCell::new(None));

    let tick_slot = slot.clone();
    let id = widget.add_tick_callback(move |_, _| {
        let flow = on_frame();
        if matches!(flow, glib::ControlFlow::Break) {
            // Returning Break unregisters the source; clear the stored id so
            // a later cancel does not try to remove a dead source.
            tick_slot.borrow_mut().take();
        }
        flow
    });
    slot.borrow_mut().replace(id);

    FrameLoopHandle { id: slot }
}
