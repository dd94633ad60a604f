use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Box as GtkBox, DrawingArea, ScrolledWindow};

use crate::motion::{easing, start_frame_loop, FrameLoopHandle, Tween};
use crate::state::{SceneStage, StageEvent, StageMachine};
use crate::ui::StyleTokens;

use super::portal::PortalView;

/// Render configuration derived from a stage. Computed fresh on every stage
/// change; nothing else decides what the scene looks like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct StageVisuals {
    pub(super) portal_scale: f64,
    pub(super) portal_lift: f64,
    pub(super) portal_inner_zoom: f64,
    pub(super) hold_opacity: f64,
    pub(super) hold_in_layout: bool,
    pub(super) overlay_opacity: f64,
    pub(super) backdrop_opacity: f64,
}

pub(super) fn stage_visuals(stage: SceneStage, tokens: StyleTokens) -> StageVisuals {
    match stage {
        SceneStage::Idle => StageVisuals {
            portal_scale: 1.0,
            portal_lift: 0.0,
            portal_inner_zoom: 1.0,
            hold_opacity: 1.0,
            hold_in_layout: true,
            overlay_opacity: 0.0,
            backdrop_opacity: 0.0,
        },
        SceneStage::Expanding => StageVisuals {
            portal_scale: tokens.portal_expand_scale,
            portal_lift: tokens.portal_expand_lift,
            portal_inner_zoom: tokens.portal_inner_zoom,
            hold_opacity: 0.0,
            hold_in_layout: true,
            overlay_opacity: tokens.overlay_opacity,
            backdrop_opacity: 0.0,
        },
        SceneStage::Entered => StageVisuals {
            portal_scale: tokens.portal_expand_scale,
            portal_lift: tokens.portal_expand_lift,
            portal_inner_zoom: tokens.portal_inner_zoom,
            hold_opacity: 0.0,
            hold_in_layout: false,
            overlay_opacity: 0.0,
            backdrop_opacity: 1.0,
        },
    }
}

pub(super) fn stage_css_class(stage: SceneStage) -> &'static str {
    match stage {
        SceneStage::Idle => "stage-idle",
        SceneStage::Expanding => "stage-expanding",
        SceneStage::Entered => "stage-entered",
    }
}

const STAGE_CSS_CLASSES: [&str; 3] = ["stage-idle", "stage-expanding", "stage-entered"];

#[derive(Clone)]
pub(super) struct StageRuntime {
    pub(super) machine: Rc<RefCell<StageMachine>>,
    pub(super) window: ApplicationWindow,
    pub(super) portal_canvas: DrawingArea,
    pub(super) portal_view: PortalView,
    pub(super) hold_entry: GtkBox,
    pub(super) scroller: ScrolledWindow,
    pub(super) page_root: GtkBox,
    pub(super) content_section: GtkBox,
    pub(super) expand_loop: Rc<RefCell<Option<FrameLoopHandle>>>,
    pub(super) scroll_loop: Rc<RefCell<Option<FrameLoopHandle>>>,
    pub(super) tokens: StyleTokens,
}

/// Completion entry point for the hold gesture. Only the first completion
/// leaves idle; anything later is logged and dropped.
pub(super) fn handle_hold_completed(runtime: &StageRuntime) {
    let stage = {
        let mut machine = runtime.machine.borrow_mut();
        if !machine.can_transition(StageEvent::HoldCompleted) {
            tracing::warn!(stage = ?machine.stage(), "hold completion ignored outside idle");
            return;
        }
        match machine.transition(StageEvent::HoldCompleted) {
            Ok(stage) => stage,
            Err(err) => {
                tracing::warn!(?err, "hold completion lost to a stage race");
                return;
            }
        }
    };
    tracing::info!(?stage, "portal expansion started");

    apply_stage(runtime, stage);
    start_portal_expansion(runtime);
    arm_enter_delay(runtime);
}

fn handle_expand_finished(runtime: &StageRuntime) {
    let stage = match runtime.machine.borrow_mut().transition(StageEvent::ExpandFinished) {
        Ok(stage) => stage,
        Err(err) => {
            tracing::warn!(?err, "expand delay fired in an unexpected stage");
            return;
        }
    };
    tracing::info!(?stage, "scene entered");

    apply_stage(runtime, stage);
    scroll_content_into_view(runtime);
}

/// Applies the visuals record for a stage. Opacity crossfades run through
/// the stylesheet transitions keyed off the stage class; layout presence and
/// the portal transform are applied directly.
fn apply_stage(runtime: &StageRuntime, stage: SceneStage) {
    let visuals = stage_visuals(stage, runtime.tokens);
    tracing::debug!(
        ?stage,
        hold_opacity = visuals.hold_opacity,
        overlay_opacity = visuals.overlay_opacity,
        backdrop_opacity = visuals.backdrop_opacity,
        "stage visuals applied"
    );

    for css_class in STAGE_CSS_CLASSES {
        runtime.window.remove_css_class(css_class);
    }
    runtime.window.add_css_class(stage_css_class(stage));

    runtime.hold_entry.set_visible(visuals.hold_in_layout);

    if stage.is_terminal() {
        // The expansion tween ends on its own schedule; pin its targets so a
        // straggling frame cannot land short of the final transform.
        runtime.portal_view.scale.set(visuals.portal_scale);
        runtime.portal_view.lift.set(visuals.portal_lift);
        runtime.portal_view.inner_zoom.set(visuals.portal_inner_zoom);
    }
    runtime.portal_canvas.queue_draw();
}

fn start_portal_expansion(runtime: &StageRuntime) {
    let tokens = runtime.tokens;
    let expand_duration = Duration::from_millis(u64::from(tokens.expand_delay_ms));
    let zoom_duration = Duration::from_millis(u64::from(tokens.crossfade_ms));
    let scale_tween = Tween::new(1.0, tokens.portal_expand_scale, expand_duration, easing::LAUNCH);
    let lift_tween = Tween::new(0.0, tokens.portal_expand_lift, expand_duration, easing::LAUNCH);
    let zoom_tween = Tween::new(1.0, tokens.portal_inner_zoom, zoom_duration, easing::LAUNCH);

    let started_at = Instant::now();
    let view = runtime.portal_view.clone();
    let canvas = runtime.portal_canvas.clone();
    let handle = start_frame_loop(&runtime.portal_canvas, move || {
        let elapsed = started_at.elapsed();
        view.scale.set(scale_tween.value_at(elapsed));
        view.lift.set(lift_tween.value_at(elapsed));
        view.inner_zoom.set(zoom_tween.value_at(elapsed));
        canvas.queue_draw();

        if scale_tween.is_finished(elapsed) && zoom_tween.is_finished(elapsed) {
            glib::ControlFlow::Break
        } else {
            glib::ControlFlow::Continue
        }
    });
    runtime.expand_loop.borrow_mut().replace(handle);
}

/// The expanding stage always lasts exactly the configured delay; the tween
/// finishing early or late never moves this boundary.
fn arm_enter_delay(runtime: &StageRuntime) {
    let delay = Duration::from_millis(u64::from(runtime.tokens.expand_delay_ms));
    let runtime = runtime.clone();
    glib::timeout_add_local_once(delay, move || {
        handle_expand_finished(&runtime);
    });
}

/// Brings the content section into view with an eased scroll. Best-effort:
/// an unresolved target skips the scroll without complaint.
fn scroll_content_into_view(runtime: &StageRuntime) {
    let Some(bounds) = runtime.content_section.compute_bounds(&runtime.page_root) else {
        tracing::debug!("content target unresolved; skipping entry scroll");
        return;
    };

    let adjustment = runtime.scroller.vadjustment();
    let limit = (adjustment.upper() - adjustment.page_size()).max(0.0);
    let target = f64::from(bounds.y()).clamp(0.0, limit);
    let tween = Tween::new(
        adjustment.value(),
        target,
        Duration::from_millis(u64::from(runtime.tokens.scroll_ms)),
        easing::LAUNCH,
    );

    let started_at = Instant::now();
    let handle = start_frame_loop(&runtime.scroller, move || {
        let elapsed = started_at.elapsed();
        adjustment.set_value(tween.value_at(elapsed));
        if tween.is_finished(elapsed) {
            glib::ControlFlow::Break
        } else {
            glib::ControlFlow::Continue
        }
    });
    runtime.scroll_loop.borrow_mut().replace(handle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::LAYOUT_TOKENS;

    #[test]
    fn idle_visuals_show_the_gesture_control_at_rest() {
        let visuals = stage_visuals(SceneStage::Idle, LAYOUT_TOKENS);
        assert_eq!(visuals.portal_scale, 1.0);
        assert_eq!(visuals.portal_lift, 0.0);
        assert_eq!(visuals.hold_opacity, 1.0);
        assert!(visuals.hold_in_layout);
        assert_eq!(visuals.overlay_opacity, 0.0);
        assert_eq!(visuals.backdrop_opacity, 0.0);
    }

    #[test]
    fn expanding_visuals_zoom_the_portal_and_fade_the_control() {
        let visuals = stage_visuals(SceneStage::Expanding, LAYOUT_TOKENS);
        assert_eq!(visuals.portal_scale, LAYOUT_TOKENS.portal_expand_scale);
        assert_eq!(visuals.portal_lift, LAYOUT_TOKENS.portal_expand_lift);
        assert_eq!(visuals.hold_opacity, 0.0);
        assert!(visuals.hold_in_layout);
        assert_eq!(visuals.overlay_opacity, LAYOUT_TOKENS.overlay_opacity);
        assert_eq!(visuals.backdrop_opacity, 0.0);
    }

    #[test]
    fn entered_visuals_remove_the_control_and_show_the_backdrop() {
        let visuals = stage_visuals(SceneStage::Entered, LAYOUT_TOKENS);
        assert!(!visuals.hold_in_layout);
        assert_eq!(visuals.overlay_opacity, 0.0);
        assert_eq!(visuals.backdrop_opacity, 1.0);
        assert_eq!(visuals.portal_scale, LAYOUT_TOKENS.portal_expand_scale);
    }

    #[test]
    fn every_stage_has_a_distinct_css_class() {
        assert_eq!(stage_css_class(SceneStage::Idle), "stage-idle");
        assert_eq!(stage_css_class(SceneStage::Expanding), "stage-expanding");
        assert_eq!(stage_css_class(SceneStage::Entered), "stage-entered");
        assert!(STAGE_CSS_CLASSES.contains(&stage_css_class(SceneStage::Idle)));
        assert!(STAGE_CSS_CLASSES.contains(&stage_css_class(SceneStage::Expanding)));
        assert!(STAGE_CSS_CLASSES.contains(&stage_css_class(SceneStage::Entered)));
    }
}
