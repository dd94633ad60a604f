use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Button, Label, Orientation};

use crate::ui::StyleTokens;

pub fn styled_label(text: &str, css_classes: &[&str]) -> Label {
    let label = Label::new(Some(text));
    for css_class in css_classes {
        label.add_css_class(css_class);
    }
    label
}

/// Full-bleed box used for backdrop, scrim and overlay layers. Layers never
/// take input; everything interactive sits above them.
pub fn layer_box(css_classes: &[&str]) -> GtkBox {
    let layer = GtkBox::new(Orientation::Vertical, 0);
    layer.set_hexpand(true);
    layer.set_vexpand(true);
    layer.set_can_target(false);
    for css_class in css_classes {
        layer.add_css_class(css_class);
    }
    layer
}

/// Circular menu button with the three-bar glyph.
pub fn nav_menu_button(tokens: StyleTokens) -> Button {
    let glyph = GtkBox::new(Orientation::Vertical, 3);
    glyph.set_halign(Align::Center);
    glyph.set_valign(Align::Center);
    for (width, halign) in [
        (20, Align::Start),
        (14, Align::End),
        (16, Align::Start),
    ] {
        let bar = GtkBox::new(Orientation::Horizontal, 0);
        bar.add_css_class("nav-menu-bar");
        bar.set_size_request(width, 2);
        bar.set_halign(halign);
        glyph.append(&bar);
    }

    let button = Button::new();
    button.set_child(Some(&glyph));
    button.set_focus_on_click(false);
    button.add_css_class("nav-menu-button");
    button.set_size_request(tokens.nav_button_size, tokens.nav_button_size);
    button
}
