/// Compile-time layout and motion tokens — not user-overridable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTokens {
    pub spacing_12: i32,
    pub spacing_16: i32,
    pub spacing_24: i32,
    pub control_radius: u16,
    pub nav_button_size: i32,
    pub hold_control_size: i32,
    pub hold_core_size: i32,
    pub ring_thickness: f64,
    pub hold_margin_bottom: i32,
    pub portal_width: i32,
    pub portal_height: i32,
    pub portal_center_lift: i32,
    pub portal_corner_radius: f64,
    pub portal_border_width: f64,
    pub window_default_width: i32,
    pub window_default_height: i32,
    pub content_min_height: i32,
    pub detail_card_height: i32,
    pub expand_delay_ms: u32,
    pub crossfade_ms: u32,
    pub backdrop_fade_ms: u32,
    pub control_fade_ms: u32,
    pub scroll_ms: u32,
    pub portal_expand_scale: f64,
    pub portal_expand_lift: f64,
    pub portal_inner_zoom: f64,
    pub overlay_opacity: f64,
    pub underlay_opacity: f64,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_12: 12,
    spacing_16: 16,
    spacing_24: 24,
    control_radius: 16,
    nav_button_size: 40,
    hold_control_size: 80,
    hold_core_size: 56,
    ring_thickness: 6.0,
    hold_margin_bottom: 48,
    portal_width: 342,
    portal_height: 570,
    portal_center_lift: 60,
    portal_corner_radius: 28.0,
    portal_border_width: 2.0,
    window_default_width: 1280,
    window_default_height: 800,
    content_min_height: 960,
    detail_card_height: 280,
    expand_delay_ms: 1_500,
    crossfade_ms: 1_200,
    backdrop_fade_ms: 900,
    control_fade_ms: 500,
    scroll_ms: 900,
    portal_expand_scale: 9.0,
    portal_expand_lift: 0.06,
    portal_inner_zoom: 1.08,
    overlay_opacity: 0.4,
    underlay_opacity: 0.25,
};
