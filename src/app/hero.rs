use gtk4::gdk::Texture;
use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::prelude::*;
use gtk4::{
    Align, Box as GtkBox, ContentFit, DrawingArea, Orientation, Overflow, Overlay, Picture,
    PolicyType, ScrolledWindow,
};

use crate::assets::load_layer_or_placeholder;
use crate::config::AssetFiles;
use crate::ui::{layer_box, nav_menu_button, styled_label, StyleTokens};

const HOLD_CAPTION: &str = "HOLD TO ENTER THE PORTAL";
const CONTENT_TITLE: &str = "Project One";
const CONTENT_LEAD: &str = "You stepped through the portal. This section is the next scene, \
with room for rich project storytelling. Imagery, captions, and subtle motion continue the \
cinematic feel.";

#[derive(Clone)]
pub(super) struct HeroUi {
    pub(super) root: Overlay,
    pub(super) scroller: ScrolledWindow,
    pub(super) page_root: GtkBox,
    pub(super) portal_canvas: DrawingArea,
    pub(super) hold_entry: GtkBox,
    pub(super) hold_ring: DrawingArea,
    pub(super) content_section: GtkBox,
    pub(super) project_image: Pixbuf,
}

pub(super) fn build_hero_ui(tokens: StyleTokens, assets: &AssetFiles) -> HeroUi {
    let scene_image = load_layer_or_placeholder(
        assets.scene_backdrop.as_deref(),
        tokens.window_default_width,
        tokens.window_default_height,
        "scene backdrop",
    );
    let underlay_image = load_layer_or_placeholder(
        assets.hero_underlay.as_deref(),
        tokens.window_default_width,
        tokens.window_default_height,
        "hero underlay",
    );
    let project_image = load_layer_or_placeholder(
        assets.project_image.as_deref(),
        tokens.portal_width,
        tokens.portal_height,
        "project image",
    );

    let hero_area = build_hero_area(tokens, &scene_image, &underlay_image);
    let portal_canvas = build_portal_canvas();
    let (hold_entry, hold_ring) = build_hold_entry(tokens);
    let crossfade_overlay = layer_box(&["crossfade-overlay"]);

    hero_area.add_overlay(&portal_canvas);
    hero_area.add_overlay(&hold_entry);
    hero_area.add_overlay(&build_top_nav(tokens));
    hero_area.add_overlay(&crossfade_overlay);

    let content_section = build_content_section(tokens, assets);

    let page_root = GtkBox::new(Orientation::Vertical, 0);
    page_root.append(&hero_area);
    page_root.append(&content_section);

    let scroller = ScrolledWindow::new();
    scroller.set_policy(PolicyType::Never, PolicyType::Automatic);
    scroller.set_hexpand(true);
    scroller.set_vexpand(true);
    scroller.set_child(Some(&page_root));

    let entered_backdrop = cover_picture(&project_image, "entered-backdrop");
    let root = Overlay::new();
    root.set_child(Some(&entered_backdrop));
    root.add_overlay(&scroller);

    HeroUi {
        root,
        scroller,
        page_root,
        portal_canvas,
        hold_entry,
        hold_ring,
        content_section,
        project_image,
    }
}

fn build_hero_area(tokens: StyleTokens, scene_image: &Pixbuf, underlay_image: &Pixbuf) -> Overlay {
    let hero_area = Overlay::new();
    hero_area.set_size_request(-1, tokens.window_default_height);

    let scene = cover_picture(scene_image, "hero-backdrop");
    scene.set_size_request(-1, tokens.window_default_height);
    hero_area.set_child(Some(&scene));

    hero_area.add_overlay(&cover_picture(underlay_image, "hero-underlay"));
    hero_area.add_overlay(&layer_box(&["scrim-vertical"]));
    hero_area.add_overlay(&layer_box(&["scrim-radial"]));

    hero_area
}

fn build_portal_canvas() -> DrawingArea {
    let canvas = DrawingArea::new();
    canvas.set_hexpand(true);
    canvas.set_vexpand(true);
    canvas.set_can_target(false);
    canvas
}

fn build_hold_entry(tokens: StyleTokens) -> (GtkBox, DrawingArea) {
    let ring = DrawingArea::new();
    ring.add_css_class("hold-ring");
    ring.set_size_request(tokens.hold_control_size, tokens.hold_control_size);
    ring.set_halign(Align::Center);
    ring.set_focusable(true);

    let caption = styled_label(HOLD_CAPTION, &["hold-caption"]);
    caption.set_halign(Align::Center);

    let entry = GtkBox::new(Orientation::Vertical, tokens.spacing_16);
    entry.add_css_class("hold-entry");
    entry.set_halign(Align::Center);
    entry.set_valign(Align::End);
    entry.set_margin_bottom(tokens.hold_margin_bottom);
    entry.append(&ring);
    entry.append(&caption);

    (entry, ring)
}

fn build_top_nav(tokens: StyleTokens) -> GtkBox {
    let brand_dot = GtkBox::new(Orientation::Horizontal, 0);
    brand_dot.add_css_class("brand-dot");
    brand_dot.set_size_request(32, 32);

    let wordmark = styled_label("CENTRIX", &["brand-wordmark"]);

    let brand = GtkBox::new(Orientation::Horizontal, tokens.spacing_12);
    brand.set_valign(Align::Center);
    brand.append(&brand_dot);
    brand.append(&wordmark);

    let spacer = GtkBox::new(Orientation::Horizontal, 0);
    spacer.set_hexpand(true);

    let nav = GtkBox::new(Orientation::Horizontal, tokens.spacing_12);
    nav.add_css_class("top-nav");
    nav.set_valign(Align::Start);
    nav.set_margin_top(tokens.spacing_16);
    nav.set_margin_bottom(tokens.spacing_16);
    nav.set_margin_start(tokens.spacing_24);
    nav.set_margin_end(tokens.spacing_24);
    nav.append(&brand);
    nav.append(&spacer);
    nav.append(&nav_menu_button(tokens));

    nav
}

fn build_content_section(tokens: StyleTokens, assets: &AssetFiles) -> GtkBox {
    let title = styled_label(CONTENT_TITLE, &["content-title"]);
    title.set_halign(Align::Start);
    title.set_xalign(0.0);

    let lead = styled_label(CONTENT_LEAD, &["content-lead"]);
    lead.set_halign(Align::Start);
    lead.set_xalign(0.0);
    lead.set_wrap(true);
    lead.set_max_width_chars(64);

    let detail_grid = GtkBox::new(Orientation::Horizontal, tokens.spacing_24);
    detail_grid.set_homogeneous(true);
    for image in detail_images(tokens, assets) {
        detail_grid.append(&detail_card(tokens, &image));
    }

    let body = GtkBox::new(Orientation::Vertical, tokens.spacing_24);
    body.set_halign(Align::Center);
    body.set_size_request(1_000, -1);
    body.set_margin_top(112);
    body.set_margin_bottom(96);
    body.set_margin_start(tokens.spacing_24);
    body.set_margin_end(tokens.spacing_24);
    body.append(&title);
    body.append(&lead);
    body.append(&detail_grid);

    let glow = layer_box(&["content-accent-glow"]);
    let framed = Overlay::new();
    framed.set_child(Some(&glow));
    framed.add_overlay(&body);
    framed.set_measure_overlay(&body, true);

    let section = GtkBox::new(Orientation::Vertical, 0);
    section.add_css_class("content-section");
    section.set_size_request(-1, tokens.content_min_height);
    section.append(&framed);

    section
}

fn detail_images(tokens: StyleTokens, assets: &AssetFiles) -> Vec<Pixbuf> {
    let placeholder_width = tokens.detail_card_height * 4 / 3;
    if assets.detail_images.is_empty() {
        return (0..2)
            .map(|_| {
                load_layer_or_placeholder(
                    None,
                    placeholder_width,
                    tokens.detail_card_height,
                    "detail image",
                )
            })
            .collect();
    }
    assets
        .detail_images
        .iter()
        .map(|name| {
            load_layer_or_placeholder(
                Some(name),
                placeholder_width,
                tokens.detail_card_height,
                "detail image",
            )
        })
        .collect()
}

fn detail_card(tokens: StyleTokens, image: &Pixbuf) -> GtkBox {
    let picture = cover_picture(image, "detail-image");
    picture.set_size_request(-1, tokens.detail_card_height);

    let card = GtkBox::new(Orientation::Vertical, 0);
    card.add_css_class("detail-card");
    card.set_overflow(Overflow::Hidden);
    card.set_hexpand(true);
    card.append(&picture);
    card
}

fn cover_picture(pixbuf: &Pixbuf, css_class: &str) -> Picture {
    let texture = Texture::for_pixbuf(pixbuf);
    let picture = Picture::for_paintable(&texture);
    picture.set_content_fit(ContentFit::Cover);
    picture.set_hexpand(true);
    picture.set_vexpand(true);
    picture.set_can_target(false);
    picture.add_css_class(css_class);
    picture
}
