use crate::motion::easing;
use crate::ui::{ColorTokens, StyleTokens};
use gtk4::CssProvider;

pub(super) fn install_runtime_css(tokens: StyleTokens, colors: &ColorTokens) {
    let css = format!(
        "
window.centrix-root {{
  background: {page_background};
  color: {text_color};
}}
.centrix-root label {{
  color: {text_color};
}}

/* ── Hero layers ── */
.hero-backdrop {{
  transition: opacity {backdrop_fade_ms}ms {launch_curve};
}}
.hero-underlay {{
  opacity: {underlay_opacity};
  transition: opacity {backdrop_fade_ms}ms {launch_curve};
}}
.stage-entered .hero-backdrop,
.stage-entered .hero-underlay {{
  opacity: 0;
}}
.scrim-vertical {{
  background: linear-gradient(to bottom,
              rgba(0, 0, 0, 0.5),
              rgba(0, 0, 0, 0.3) 50%,
              rgba(0, 0, 0, 0.6));
}}
.scrim-radial {{
  background: radial-gradient(circle at 50% 40%,
              rgba(255, 255, 255, 0.25) 0%,
              rgba(255, 255, 255, 0.08) 35%,
              rgba(0, 0, 0, 0.5) 100%);
}}

/* ── Top navigation ── */
label.brand-wordmark {{
  font-size: 13px;
  letter-spacing: 3px;
}}
.brand-dot {{
  border-radius: 999px;
  background: {outline_color};
}}
button.nav-menu-button {{
  border-radius: 999px;
  padding: 0;
  border: none;
  background: {accent_strong_color};
  transition: background {control_fade_ms}ms ease;
}}
button.nav-menu-button:hover,
button.nav-menu-button:active {{
  background: {accent_color};
}}
.nav-menu-bar {{
  border-radius: 999px;
  background: #ffffff;
}}

/* ── Hold control ── */
.hold-entry {{
  transition: opacity {control_fade_ms}ms ease;
}}
.stage-expanding .hold-entry {{
  opacity: 0;
}}
.hold-ring {{
  border-radius: 999px;
}}
.hold-ring:focus-visible {{
  box-shadow: 0 0 0 2px alpha({accent_color}, 0.4);
}}
label.hold-caption {{
  font-size: 11px;
  letter-spacing: 5px;
  color: {muted_text_color};
}}

/* ── Stage crossfades ── */
.crossfade-overlay {{
  opacity: 0;
  background: radial-gradient(circle at 50% 50%,
              rgba(255, 255, 255, 0.1) 0%,
              rgba(0, 0, 0, 0.6) 100%);
  transition: opacity {crossfade_ms}ms {launch_curve};
}}
.stage-expanding .crossfade-overlay {{
  opacity: {overlay_opacity};
}}
.entered-backdrop {{
  opacity: 0;
  transition: opacity {backdrop_fade_ms}ms {launch_curve};
}}
.stage-entered .entered-backdrop {{
  opacity: 1;
}}

/* ── Content section ── */
.content-section {{
  background: {page_background};
}}
.content-accent-glow {{
  background: radial-gradient(circle at 50% 0%,
              alpha({accent_color}, 0.15) 0%,
              rgba(255, 255, 255, 0) 60%);
}}
label.content-title {{
  font-size: 44px;
  font-weight: 600;
}}
label.content-lead {{
  font-size: 15px;
  color: {muted_text_color};
}}
.detail-card {{
  border-radius: {control_radius}px;
  border: 1px solid {border_color};
  background: {panel_background};
}}
",
        page_background = colors.page_background,
        text_color = colors.text_color,
        muted_text_color = colors.muted_text_color,
        outline_color = colors.outline_color,
        accent_color = colors.accent_color,
        accent_strong_color = colors.accent_strong_color,
        border_color = colors.border_color,
        panel_background = colors.panel_background,
        control_radius = tokens.control_radius,
        underlay_opacity = tokens.underlay_opacity,
        overlay_opacity = tokens.overlay_opacity,
        crossfade_ms = tokens.crossfade_ms,
        backdrop_fade_ms = tokens.backdrop_fade_ms,
        control_fade_ms = tokens.control_fade_ms,
        launch_curve = easing::LAUNCH.css(),
    );

    let provider = CssProvider::new();
    provider.load_from_data(&css);
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
