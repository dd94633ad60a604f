use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "centrix";
const APP_CONFIG_FILE: &str = "config.json";

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PortalConfig {
    #[serde(default)]
    pub(crate) hold_duration_ms: Option<u64>,
    #[serde(default)]
    pub(crate) fullscreen: Option<bool>,
    #[serde(default)]
    pub(crate) assets: AssetFiles,
}

/// Image files composing the page, absolute or relative to the asset
/// directory. Every entry is optional; missing ones fall back to generated
/// placeholders.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AssetFiles {
    #[serde(default)]
    pub(crate) scene_backdrop: Option<String>,
    #[serde(default)]
    pub(crate) hero_underlay: Option<String>,
    #[serde(default)]
    pub(crate) project_image: Option<String>,
    #[serde(default)]
    pub(crate) detail_images: Vec<String>,
}

pub(crate) fn load_portal_config() -> PortalConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_portal_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_portal_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> PortalConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return PortalConfig::default(),
    };
    if !path.exists() {
        return PortalConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            PortalConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            PortalConfig::default()
        }
    }
}

/// Directory that relative asset names resolve against.
pub(crate) fn asset_dir(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    let mut path = config_root(xdg_config_home, home).ok()?;
    path.push(APP_DIR);
    path.push("assets");
    Some(path)
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
