use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;
use std::time::Instant;

use gtk4::cairo;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{DrawingArea, EventControllerKey, EventControllerMotion, GestureClick};

use crate::gesture::{HoldSample, HoldTimeline};
use crate::motion::{start_frame_loop, FrameLoopHandle};
use crate::theme::{PaintPalette, Rgba};
use crate::ui::StyleTokens;

#[derive(Clone)]
pub(super) struct HoldControlContext {
    pub(super) ring: DrawingArea,
    pub(super) timeline: Rc<RefCell<HoldTimeline>>,
    pub(super) displayed_progress: Rc<Cell<f64>>,
    pub(super) frame_loop: Rc<RefCell<Option<FrameLoopHandle>>>,
    pub(super) palette: PaintPalette,
    pub(super) tokens: StyleTokens,
    pub(super) on_complete: Rc<dyn Fn()>,
}

/// Wires the ring indicator and every input path of the hold gesture.
///
/// Press starts the session; release, the pointer leaving the control, the
/// touch sequence ending and key release all converge on the one cancel
/// path. Space and Enter drive the same session for keyboard users.
pub(super) fn connect_hold_control(context: HoldControlContext) {
    install_ring_draw_func(&context);

    let click = GestureClick::new();
    click.set_button(gdk::BUTTON_PRIMARY);
    {
        let press_context = context.clone();
        click.connect_pressed(move |gesture, _, _, _| {
            begin_hold(&press_context);
            gesture.set_state(gtk4::EventSequenceState::Claimed);
        });
    }
    {
        let release_context = context.clone();
        click.connect_released(move |_, _, _, _| {
            cancel_hold(&release_context);
        });
    }
    context.ring.add_controller(click);

    let motion = EventControllerMotion::new();
    {
        let leave_context = context.clone();
        motion.connect_leave(move |_| {
            cancel_hold(&leave_context);
        });
    }
    context.ring.add_controller(motion);

    let key = EventControllerKey::new();
    {
        let press_context = context.clone();
        key.connect_key_pressed(move |_, keyval, _, _| {
            if is_activation_key(keyval) {
                begin_hold(&press_context);
                return glib::Propagation::Stop;
            }
            glib::Propagation::Proceed
        });
    }
    {
        let release_context = context.clone();
        key.connect_key_released(move |_, keyval, _, _| {
            if is_activation_key(keyval) {
                cancel_hold(&release_context);
            }
        });
    }
    context.ring.add_controller(key);
}

fn begin_hold(context: &HoldControlContext) {
    // The holding flag doubles as the scheduling guard: repeated press
    // events and key auto-repeat must not spawn a second frame loop.
    if context.timeline.borrow().holding() {
        return;
    }
    context.timeline.borrow_mut().start(Instant::now());
    context.displayed_progress.set(0.0);
    context.ring.queue_draw();

    let timeline = context.timeline.clone();
    let displayed_progress = context.displayed_progress.clone();
    let ring = context.ring.clone();
    let on_complete = context.on_complete.clone();
    let handle = start_frame_loop(&context.ring, move || {
        // Release the borrow before dispatching completion.
        let sample = timeline.borrow_mut().sample(Instant::now());
        match sample {
            HoldSample::Holding(fraction) => {
                displayed_progress.set(fraction);
                ring.queue_draw();
                glib::ControlFlow::Continue
            }
            HoldSample::Completed => {
                displayed_progress.set(1.0);
                ring.queue_draw();
                (on_complete)();
                glib::ControlFlow::Break
            }
        }
    });
    context.frame_loop.borrow_mut().replace(handle);
}

fn cancel_hold(context: &HoldControlContext) {
    if let Some(handle) = context.frame_loop.borrow_mut().take() {
        handle.cancel();
    }
    context.timeline.borrow_mut().cancel();
    context.displayed_progress.set(0.0);
    context.ring.queue_draw();
}

fn is_activation_key(keyval: gdk::Key) -> bool {
    matches!(keyval, gdk::Key::space | gdk::Key::Return | gdk::Key::KP_Enter)
}

fn install_ring_draw_func(context: &HoldControlContext) {
    let timeline = context.timeline.clone();
    let displayed_progress = context.displayed_progress.clone();
    let palette = context.palette;
    let tokens = context.tokens;
    context.ring.set_draw_func(move |_, cr, width, height| {
        draw_hold_ring(
            cr,
            f64::from(width),
            f64::from(height),
            displayed_progress.get(),
            timeline.borrow().holding(),
            palette,
            tokens,
        );
    });
}

fn draw_hold_ring(
    cr: &cairo::Context,
    width: f64,
    height: f64,
    progress: f64,
    holding: bool,
    palette: PaintPalette,
    tokens: StyleTokens,
) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let outer_radius = width.min(height) / 2.0 - 1.0;
    let ring_radius = outer_radius - tokens.ring_thickness / 2.0;

    // Track ring.
    set_source(cr, palette.ring_track);
    cr.set_line_width(tokens.ring_thickness);
    cr.arc(center_x, center_y, ring_radius, 0.0, 2.0 * PI);
    let _ = cr.stroke();

    // Progress arc, from twelve o'clock.
    if progress > 0.0 {
        set_source(cr, palette.accent);
        cr.set_line_cap(cairo::LineCap::Round);
        cr.arc(
            center_x,
            center_y,
            ring_radius,
            -PI / 2.0,
            -PI / 2.0 + progress.clamp(0.0, 1.0) * 2.0 * PI,
        );
        let _ = cr.stroke();
        cr.set_line_cap(cairo::LineCap::Butt);
    }

    // Frosted inner disc.
    let inner_radius = outer_radius - tokens.ring_thickness - 2.0;
    set_source(cr, Rgba::new(1.0, 1.0, 1.0, 0.1));
    cr.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
    let _ = cr.fill();

    // Core disc lights up while the press is active.
    let core_radius = f64::from(tokens.hold_core_size) / 2.0 - 2.0;
    let core_color = if holding {
        palette.accent_strong
    } else {
        Rgba::new(1.0, 1.0, 1.0, 0.15)
    };
    set_source(cr, core_color);
    cr.arc(center_x, center_y, core_radius, 0.0, 2.0 * PI);
    let _ = cr.fill();
    set_source(cr, Rgba::new(1.0, 1.0, 1.0, 0.3));
    cr.set_line_width(1.0);
    cr.arc(center_x, center_y, core_radius, 0.0, 2.0 * PI);
    let _ = cr.stroke();

    // Center dot.
    set_source(cr, Rgba::new(1.0, 1.0, 1.0, 1.0));
    cr.arc(center_x, center_y, 4.0, 0.0, 2.0 * PI);
    let _ = cr.fill();
}

fn set_source(cr: &cairo::Context, color: Rgba) {
    cr.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_and_enter_activate_the_hold() {
        assert!(is_activation_key(gdk::Key::space));
        assert!(is_activation_key(gdk::Key::Return));
        assert!(is_activation_key(gdk::Key::KP_Enter));
    }

    #[test]
    fn other_keys_do_not_activate_the_hold() {
        assert!(!is_activation_key(gdk::Key::Escape));
        assert!(!is_activation_key(gdk::Key::a));
        assert!(!is_activation_key(gdk::Key::Tab));
    }
}
