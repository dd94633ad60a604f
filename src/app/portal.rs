use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;

use gtk4::cairo;
use gtk4::gdk::prelude::GdkCairoContextExt;
use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::prelude::*;
use gtk4::DrawingArea;

use crate::theme::PaintPalette;
use crate::ui::StyleTokens;

/// Mutable view parameters of the portal, shared between the draw function
/// and the expansion animation.
#[derive(Clone)]
pub(super) struct PortalView {
    pub(super) scale: Rc<Cell<f64>>,
    /// Upward offset as a fraction of the hero height.
    pub(super) lift: Rc<Cell<f64>>,
    pub(super) inner_zoom: Rc<Cell<f64>>,
}

impl PortalView {
    pub(super) fn at_rest() -> Self {
        Self {
            scale: Rc::new(Cell::new(1.0)),
            lift: Rc::new(Cell::new(0.0)),
            inner_zoom: Rc::new(Cell::new(1.0)),
        }
    }
}

pub(super) fn install_portal_draw_func(
    canvas: &DrawingArea,
    image: Pixbuf,
    view: PortalView,
    palette: PaintPalette,
    tokens: StyleTokens,
) {
    canvas.set_draw_func(move |_, cr, width, height| {
        let canvas_width = f64::from(width);
        let canvas_height = f64::from(height);
        let portal_width = f64::from(tokens.portal_width);
        let portal_height = f64::from(tokens.portal_height);

        let scale = view.scale.get();
        let lift = view.lift.get() * canvas_height;
        let center_x = canvas_width / 2.0;
        let center_y = canvas_height / 2.0 - f64::from(tokens.portal_center_lift) - lift;

        let _ = cr.save();
        cr.translate(center_x, center_y);
        cr.scale(scale, scale);
        cr.translate(-portal_width / 2.0, -portal_height / 2.0);

        let _ = cr.save();
        arch_path(cr, portal_width, portal_height, tokens.portal_corner_radius);
        cr.clip();
        paint_cover_image(cr, &image, portal_width, portal_height, view.inner_zoom.get());
        paint_bottom_fade(cr, portal_width, portal_height);
        let _ = cr.restore();

        arch_path(cr, portal_width, portal_height, tokens.portal_corner_radius);
        cr.set_line_width(tokens.portal_border_width);
        cr.set_source_rgba(
            palette.outline.red,
            palette.outline.green,
            palette.outline.blue,
            palette.outline.alpha,
        );
        let _ = cr.stroke();

        let _ = cr.restore();
    });
}

/// Arch silhouette: a semicircular top over rounded bottom corners.
fn arch_path(cr: &cairo::Context, width: f64, height: f64, corner_radius: f64) {
    let top_radius = width / 2.0;
    cr.new_path();
    cr.arc(width / 2.0, top_radius, top_radius, PI, 2.0 * PI);
    cr.line_to(width, height - corner_radius);
    cr.arc(
        width - corner_radius,
        height - corner_radius,
        corner_radius,
        0.0,
        PI / 2.0,
    );
    cr.line_to(corner_radius, height);
    cr.arc(corner_radius, height - corner_radius, corner_radius, PI / 2.0, PI);
    cr.close_path();
}

fn paint_cover_image(
    cr: &cairo::Context,
    image: &Pixbuf,
    frame_width: f64,
    frame_height: f64,
    zoom: f64,
) {
    let image_width = f64::from(image.width());
    let image_height = f64::from(image.height());
    let scale = cover_scale(image_width, image_height, frame_width, frame_height) * zoom;

    let _ = cr.save();
    cr.translate(frame_width / 2.0, frame_height / 2.0);
    cr.scale(scale, scale);
    cr.set_source_pixbuf(image, -image_width / 2.0, -image_height / 2.0);
    let _ = cr.paint();
    let _ = cr.restore();
}

fn paint_bottom_fade(cr: &cairo::Context, frame_width: f64, frame_height: f64) {
    let fade_top = frame_height * 0.55;
    let gradient = cairo::LinearGradient::new(0.0, fade_top, 0.0, frame_height);
    gradient.add_color_stop_rgba(0.0, 0.0, 0.0, 0.0, 0.0);
    gradient.add_color_stop_rgba(0.6, 0.0, 0.0, 0.0, 0.1);
    gradient.add_color_stop_rgba(1.0, 0.0, 0.0, 0.0, 0.3);
    let _ = cr.set_source(&gradient);
    cr.rectangle(0.0, fade_top, frame_width, frame_height - fade_top);
    let _ = cr.fill();
}

/// Uniform scale that makes an image cover a frame, cropping the overflow.
fn cover_scale(image_width: f64, image_height: f64, frame_width: f64, frame_height: f64) -> f64 {
    if image_width <= 0.0 || image_height <= 0.0 {
        return 1.0;
    }
    (frame_width / image_width).max(frame_height / image_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_scale_fills_the_larger_deficit_axis() {
        // A wide image covering a tall frame must scale by height.
        assert_eq!(cover_scale(200.0, 100.0, 100.0, 100.0), 1.0);
        // A square image covering a taller frame scales past the width fit.
        assert_eq!(cover_scale(100.0, 100.0, 100.0, 300.0), 3.0);
    }

    #[test]
    fn cover_scale_upscales_and_downscales() {
        assert_eq!(cover_scale(50.0, 50.0, 100.0, 100.0), 2.0);
        assert_eq!(cover_scale(400.0, 400.0, 100.0, 100.0), 0.25);
    }

    #[test]
    fn cover_scale_guards_against_empty_images() {
        assert_eq!(cover_scale(0.0, 100.0, 100.0, 100.0), 1.0);
        assert_eq!(cover_scale(100.0, 0.0, 100.0, 100.0), 1.0);
    }

    #[test]
    fn portal_view_starts_at_rest() {
        let view = PortalView::at_rest();
        assert_eq!(view.scale.get(), 1.0);
        assert_eq!(view.lift.get(), 0.0);
        assert_eq!(view.inner_zoom.get(), 1.0);
    }
}
