use std::cell::Cell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{gdk, ApplicationWindow, GestureClick, PropagationPhase};

/// Scoped suppression of secondary-button input over the whole window.
///
/// A long press on a touch surface or a stray right click would otherwise
/// pop a context menu mid-hold. The guard owns the controller it registered
/// and detaches it exactly once, so repeated window activations cannot
/// accumulate handlers.
pub(super) struct InputGuard {
    window: ApplicationWindow,
    controller: GestureClick,
    released: Cell<bool>,
}

impl InputGuard {
    pub(super) fn install(window: &ApplicationWindow) -> Rc<Self> {
        let controller = GestureClick::new();
        controller.set_button(gdk::BUTTON_SECONDARY);
        controller.set_propagation_phase(PropagationPhase::Capture);
        controller.connect_pressed(|gesture, _, _, _| {
            gesture.set_state(gtk4::EventSequenceState::Claimed);
            tracing::trace!("suppressed secondary-button press");
        });
        window.add_controller(controller.clone());
        tracing::debug!("context-menu suppression installed");

        Rc::new(Self {
            window: window.clone(),
            controller,
            released: Cell::new(false),
        })
    }

    pub(super) fn release(&self) {
        if self.released.replace(true) {
            return;
        }
        self.window.remove_controller(&self.controller);
        tracing::debug!("context-menu suppression released");
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        self.release();
    }
}
