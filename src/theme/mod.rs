use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{app_config_path, config_env_dirs, ConfigPathError};

const THEME_APP_DIR: &str = "centrix";
const THEME_CONFIG_FILE: &str = "theme.json";

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read theme config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse theme config")]
    ParseConfig(#[from] serde_json::Error),
}

/// Palette overrides from `theme.json` — all fields optional for partial
/// override. The page is a fixed dark composition, so there is a single
/// palette rather than per-mode variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorOverrides {
    pub accent_color: Option<String>,
    pub accent_strong_color: Option<String>,
    pub ring_track_color: Option<String>,
    pub text_color: Option<String>,
    pub muted_text_color: Option<String>,
    pub outline_color: Option<String>,
    pub border_color: Option<String>,
    pub panel_background: Option<String>,
    pub page_background: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub colors: ColorOverrides,
}

/// Resolved palette feeding the runtime stylesheet and the cairo paints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTokens {
    pub accent_color: String,
    pub accent_strong_color: String,
    pub ring_track_color: String,
    pub text_color: String,
    pub muted_text_color: String,
    pub outline_color: String,
    pub border_color: String,
    pub panel_background: String,
    pub page_background: String,
}

pub fn default_color_tokens() -> ColorTokens {
    ColorTokens {
        accent_color: "#fb923c".to_string(),
        accent_strong_color: "rgba(249, 115, 22, 0.9)".to_string(),
        ring_track_color: "rgba(255, 255, 255, 0.15)".to_string(),
        text_color: "rgba(255, 255, 255, 0.92)".to_string(),
        muted_text_color: "rgba(255, 255, 255, 0.7)".to_string(),
        outline_color: "rgba(255, 255, 255, 0.9)".to_string(),
        border_color: "rgba(255, 255, 255, 0.1)".to_string(),
        panel_background: "rgba(255, 255, 255, 0.05)".to_string(),
        page_background: "#000000".to_string(),
    }
}

pub fn tokens_for(config: &ThemeConfig) -> ColorTokens {
    let defaults = default_color_tokens();
    let overrides = &config.colors;
    ColorTokens {
        accent_color: overrides
            .accent_color
            .clone()
            .unwrap_or(defaults.accent_color),
        accent_strong_color: overrides
            .accent_strong_color
            .clone()
            .unwrap_or(defaults.accent_strong_color),
        ring_track_color: overrides
            .ring_track_color
            .clone()
            .unwrap_or(defaults.ring_track_color),
        text_color: overrides.text_color.clone().unwrap_or(defaults.text_color),
        muted_text_color: overrides
            .muted_text_color
            .clone()
            .unwrap_or(defaults.muted_text_color),
        outline_color: overrides
            .outline_color
            .clone()
            .unwrap_or(defaults.outline_color),
        border_color: overrides
            .border_color
            .clone()
            .unwrap_or(defaults.border_color),
        panel_background: overrides
            .panel_background
            .clone()
            .unwrap_or(defaults.panel_background),
        page_background: overrides
            .page_background
            .clone()
            .unwrap_or(defaults.page_background),
    }
}

pub fn load_theme_config() -> ThemeResult<ThemeConfig> {
    let (xdg_config_home, home) = config_env_dirs();
    load_theme_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_theme_config_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ThemeResult<ThemeConfig> {
    let path = app_config_path(THEME_APP_DIR, THEME_CONFIG_FILE, xdg_config_home, home)
        .map_err(|ConfigPathError::MissingHomeDirectory| ThemeError::MissingHomeDirectory)?;
    if !path.exists() {
        return Ok(ThemeConfig::default());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|source| ThemeError::ReadConfig { path, source })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Straight-alpha color for cairo paints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parses `#rrggbb`, `#rrggbbaa` and `rgba(r, g, b, a)` notation.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(body) = value
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgba_body(body);
        }
        None
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let channel = |index: usize| -> Option<f64> {
            let byte = u8::from_str_radix(hex.get(index..index + 2)?, 16).ok()?;
            Some(f64::from(byte) / 255.0)
        };
        match hex.len() {
            6 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, 1.0)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    fn parse_rgba_body(body: &str) -> Option<Self> {
        let mut parts = body.split(',').map(str::trim);
        let red: f64 = parts.next()?.parse().ok()?;
        let green: f64 = parts.next()?.parse().ok()?;
        let blue: f64 = parts.next()?.parse().ok()?;
        let alpha: f64 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(
            (red / 255.0).clamp(0.0, 1.0),
            (green / 255.0).clamp(0.0, 1.0),
            (blue / 255.0).clamp(0.0, 1.0),
            alpha.clamp(0.0, 1.0),
        ))
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

/// Colors the drawing code paints with, pre-parsed from the token strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintPalette {
    pub accent: Rgba,
    pub accent_strong: Rgba,
    pub ring_track: Rgba,
    pub outline: Rgba,
}

impl PaintPalette {
    /// Token strings that fail to parse fall back to the built-in palette so
    /// a bad theme file can never blank the drawing layers.
    pub fn from_tokens(tokens: &ColorTokens) -> Self {
        let defaults = default_color_tokens();
        let parse_or = |value: &str, fallback: &str| {
            Rgba::parse(value).unwrap_or_else(|| {
                tracing::warn!(value, "unparsable theme color; using default");
                Rgba::parse(fallback).unwrap_or(Rgba::new(1.0, 1.0, 1.0, 1.0))
            })
        };
        Self {
            accent: parse_or(&tokens.accent_color, &defaults.accent_color),
            accent_strong: parse_or(&tokens.accent_strong_color, &defaults.accent_strong_color),
            ring_track: parse_or(&tokens.ring_track_color, &defaults.ring_track_color),
            outline: parse_or(&tokens.outline_color, &defaults.outline_color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_for_defaults_when_no_overrides() {
        let tokens = tokens_for(&ThemeConfig::default());
        assert_eq!(tokens, default_color_tokens());
    }

    #[test]
    fn tokens_for_applies_partial_overrides() {
        let config: ThemeConfig = serde_json::from_str(
            r#"{"colors": {"accent_color": "#00ff00", "text_color": "rgba(200, 200, 200, 1.0)"}}"#,
        )
        .expect("should parse");

        let tokens = tokens_for(&config);
        assert_eq!(tokens.accent_color, "#00ff00");
        assert_eq!(tokens.text_color, "rgba(200, 200, 200, 1.0)");
        assert_eq!(
            tokens.ring_track_color,
            default_color_tokens().ring_track_color
        );
    }

    #[test]
    fn missing_theme_file_yields_defaults() {
        let config = load_theme_config_with(Some(Path::new("/nonexistent-config-root")), None)
            .expect("missing file should be fine");
        assert!(config.colors.accent_color.is_none());
    }

    #[test]
    fn theme_path_requires_some_base_directory() {
        let err =
            load_theme_config_with(None, None).expect_err("missing home should fail");
        assert!(matches!(err, ThemeError::MissingHomeDirectory));
    }

    #[test]
    fn rgba_parses_hex_notation() {
        let color = Rgba::parse("#fb923c").expect("should parse");
        assert!((color.red - 251.0 / 255.0).abs() < 1e-9);
        assert!((color.green - 146.0 / 255.0).abs() < 1e-9);
        assert!((color.blue - 60.0 / 255.0).abs() < 1e-9);
        assert_eq!(color.alpha, 1.0);

        let with_alpha = Rgba::parse("#ffffff80").expect("should parse");
        assert!((with_alpha.alpha - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn rgba_parses_functional_notation() {
        let color = Rgba::parse("rgba(255, 255, 255, 0.15)").expect("should parse");
        assert_eq!(color.red, 1.0);
        assert_eq!(color.alpha, 0.15);
    }

    #[test]
    fn rgba_rejects_malformed_input() {
        assert!(Rgba::parse("#xyz").is_none());
        assert!(Rgba::parse("#12345").is_none());
        assert!(Rgba::parse("rgba(1, 2, 3)").is_none());
        assert!(Rgba::parse("rgba(1, 2, 3, 4, 5)").is_none());
        assert!(Rgba::parse("orange").is_none());
    }

    #[test]
    fn paint_palette_survives_unparsable_tokens() {
        let mut tokens = default_color_tokens();
        tokens.accent_color = "not-a-color".to_string();

        let palette = PaintPalette::from_tokens(&tokens);
        let fallback = Rgba::parse(&default_color_tokens().accent_color).expect("default parses");
        assert_eq!(palette.accent, fallback);
    }
}
