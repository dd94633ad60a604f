use std::path::{Path, PathBuf};

use gtk4::gdk_pixbuf::{Colorspace, Pixbuf};
use gtk4::glib;
use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::config;

pub type AssetResult<T> = std::result::Result<T, AssetError>;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no asset directory available to resolve {name}")]
    NoAssetDirectory { name: String },
    #[error("failed to load image: {path}")]
    LoadImage { path: PathBuf, source: glib::Error },
}

/// Resolves a configured asset name: absolute paths pass through, relative
/// names resolve against the asset directory next to the config file.
pub fn resolve_asset_path(name: &str) -> AssetResult<PathBuf> {
    let (xdg_config_home, home) = config::config_env_dirs();
    resolve_asset_path_in(
        name,
        config::asset_dir(xdg_config_home.as_deref(), home.as_deref()),
    )
}

fn resolve_asset_path_in(name: &str, asset_dir: Option<PathBuf>) -> AssetResult<PathBuf> {
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return Ok(candidate.to_path_buf());
    }
    let dir = asset_dir.ok_or_else(|| AssetError::NoAssetDirectory {
        name: name.to_string(),
    })?;
    Ok(dir.join(candidate))
}

pub fn load_pixbuf(path: &Path) -> AssetResult<Pixbuf> {
    Pixbuf::from_file(path).map_err(|source| AssetError::LoadImage {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a configured image layer, degrading to a generated placeholder when
/// the entry is absent or the file cannot be read. Load failure is logged
/// and never retried; the page renders either way.
pub fn load_layer_or_placeholder(
    name: Option<&str>,
    width: i32,
    height: i32,
    role: &str,
) -> Pixbuf {
    let Some(name) = name else {
        tracing::debug!(role, "no image configured; using placeholder");
        return placeholder_pixbuf(width, height);
    };

    let loaded = resolve_asset_path(name).and_then(|path| load_pixbuf(&path));
    match loaded {
        Ok(pixbuf) => pixbuf,
        Err(err) => {
            tracing::warn!(?err, role, name, "image unavailable; using placeholder");
            placeholder_pixbuf(width, height)
        }
    }
}

const PLACEHOLDER_TOP: [u8; 3] = [38, 38, 46];
const PLACEHOLDER_BOTTOM: [u8; 3] = [8, 8, 10];

/// Vertical gradient stand-in for a missing photograph.
pub fn placeholder_pixbuf(width: i32, height: i32) -> Pixbuf {
    let gradient = placeholder_gradient(width.max(1) as u32, height.max(1) as u32);
    pixbuf_from_rgba(&gradient)
}

fn placeholder_gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |_, y| {
        let fraction = if height > 1 {
            f64::from(y) / f64::from(height - 1)
        } else {
            0.0
        };
        let channel = |index: usize| {
            let top = f64::from(PLACEHOLDER_TOP[index]);
            let bottom = f64::from(PLACEHOLDER_BOTTOM[index]);
            (top + (bottom - top) * fraction).round() as u8
        };
        Rgba([channel(0), channel(1), channel(2), 255])
    })
}

fn pixbuf_from_rgba(image: &RgbaImage) -> Pixbuf {
    let width = image.width() as i32;
    let height = image.height() as i32;
    let rowstride = width * 4;
    let bytes = glib::Bytes::from(image.as_raw().as_slice());
    Pixbuf::from_bytes(&bytes, Colorspace::Rgb, true, 8, width, height, rowstride)
}
