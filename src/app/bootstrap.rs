use std::time::Duration;

use crate::config::{load_portal_config, AssetFiles};
use crate::gesture::DEFAULT_HOLD_DURATION;
use crate::theme::{load_theme_config, tokens_for, ColorTokens, PaintPalette, ThemeConfig};

#[derive(Clone)]
pub(super) struct AppBootstrap {
    pub(super) hold_duration: Duration,
    pub(super) fullscreen: bool,
    pub(super) color_tokens: ColorTokens,
    pub(super) paint_palette: PaintPalette,
    pub(super) assets: AssetFiles,
}

pub(super) fn bootstrap_app_runtime() -> AppBootstrap {
    let config = load_portal_config();
    let theme_config = load_or_default_theme_config();
    let color_tokens = tokens_for(&theme_config);
    let paint_palette = PaintPalette::from_tokens(&color_tokens);

    let hold_duration = resolve_hold_duration(config.hold_duration_ms);
    let fullscreen = config.fullscreen.unwrap_or(false);
    tracing::info!(
        hold_duration_ms = hold_duration.as_millis() as u64,
        fullscreen,
        "resolved runtime configuration"
    );

    AppBootstrap {
        hold_duration,
        fullscreen,
        color_tokens,
        paint_palette,
        assets: config.assets,
    }
}

fn load_or_default_theme_config() -> ThemeConfig {
    load_theme_config().unwrap_or_else(|err| {
        tracing::warn!(?err, "failed to load theme config; using defaults");
        ThemeConfig::default()
    })
}

fn resolve_hold_duration(configured_ms: Option<u64>) -> Duration {
    match configured_ms {
        Some(0) => {
            tracing::warn!("hold_duration_ms of 0 ignored; using default");
            DEFAULT_HOLD_DURATION
        }
        Some(millis) => Duration::from_millis(millis),
        None => DEFAULT_HOLD_DURATION,
    }
}
