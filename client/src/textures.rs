//! Memory-backed panorama textures.
//!
//! The backend writes finished panoramas to a fixed assets directory; this
//! store keeps decoded RGBA copies of the "old" and "new" images and
//! tracks which of the two is currently shown. Rendering is someone
//! else's job.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::error::ClientError;

pub const NEW_PANORAMA_FILE: &str = "new.jpg";
pub const OLD_PANORAMA_FILE: &str = "old.jpg";
pub const INPUT_PANORAMA_FILE: &str = "input.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panorama {
    Old,
    New,
}

pub struct TextureStore {
    assets_dir: PathBuf,
    old: Option<RgbaImage>,
    new: Option<RgbaImage>,
    active: Panorama,
}

impl TextureStore {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            old: None,
            new: None,
            active: Panorama::New,
        }
    }

    /// Reload both panorama textures from disk. A missing or unreadable
    /// file aborts the refresh; whatever was loaded before stays in place.
    pub fn refresh(&mut self) -> Result<(), ClientError> {
        let new = self.load(NEW_PANORAMA_FILE)?;
        let old = self.load(OLD_PANORAMA_FILE)?;
        info!(
            new_px = new.width() * new.height(),
            old_px = old.width() * old.height(),
            "panorama textures refreshed"
        );
        self.new = Some(new);
        self.old = Some(old);
        Ok(())
    }

    fn load(&self, file_name: &str) -> Result<RgbaImage, ClientError> {
        let path = self.assets_dir.join(file_name);
        let img = image::open(&path).map_err(|source| ClientError::Texture { path, source })?;
        Ok(img.to_rgba8())
    }

    /// Flip between the old and new panorama.
    pub fn toggle(&mut self) {
        self.active = match self.active {
            Panorama::Old => Panorama::New,
            Panorama::New => Panorama::Old,
        };
    }

    pub fn show(&mut self, which: Panorama) {
        self.active = which;
    }

    pub fn active(&self) -> Panorama {
        self.active
    }

    /// Decoded texture of the currently shown panorama, if loaded.
    pub fn active_texture(&self) -> Option<&RgbaImage> {
        match self.active {
            Panorama::Old => self.old.as_ref(),
            Panorama::New => self.new.as_ref(),
        }
    }
}

/// Re-encode the image at `path` as a JPEG at the given quality, for
/// upload to the analysis backend.
pub fn compress_jpeg(path: &Path, quality: u8) -> Result<Vec<u8>, ClientError> {
    let img = image::open(path).map_err(|source| ClientError::Texture {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buf = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality);
    encoder
        .encode_image(&img.to_rgb8())
        .map_err(|source| ClientError::Texture {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(buf)
}
