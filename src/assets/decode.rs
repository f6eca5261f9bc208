use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::premultiply_rgba8_in_place;
use crate::foundation::error::{ShotframeError, ShotframeResult};

/// Decoded source raster at its natural pixel size.
///
/// Pixels are stored premultiplied so the compositor can hand them to the rasterizer without a
/// conversion per render. The buffer is shared and immutable; cloning is cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl SourceImage {
    /// Decode PNG, JPEG or WebP bytes. The container is sniffed from the data, not a file name.
    #[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
    pub fn decode(bytes: &[u8]) -> ShotframeResult<Self> {
        let format = image::guess_format(bytes)
            .map_err(|e| ShotframeError::decode(format!("unrecognized image data: {e}")))?;
        if !matches!(
            format,
            image::ImageFormat::Png | image::ImageFormat::Jpeg | image::ImageFormat::WebP
        ) {
            return Err(ShotframeError::decode(format!(
                "unsupported image format {format:?} (expected PNG, JPEG or WebP)"
            )));
        }

        let dyn_img = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| ShotframeError::decode(format!("decode {format:?}: {e}")))?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!(?format, width, height, "decoded source image");
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Read a file and decode it with [`SourceImage::decode`].
    pub fn from_path(path: impl AsRef<Path>) -> ShotframeResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read source image '{}'", path.display()))?;
        Self::decode(&bytes)
    }

    /// Build from straight-alpha RGBA8 pixels in row-major order.
    pub fn from_rgba8(width: u32, height: u32, mut rgba: Vec<u8>) -> ShotframeResult<Self> {
        if width == 0 || height == 0 {
            return Err(ShotframeError::decode("source image has zero size"));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| ShotframeError::decode("source image size overflow"))?;
        if rgba.len() != expected {
            return Err(ShotframeError::decode(format!(
                "source image expects {expected} bytes for {width}x{height}, got {}",
                rgba.len()
            )));
        }
        premultiply_rgba8_in_place(&mut rgba);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba),
        })
    }

    /// Natural width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 pixels.
    pub fn rgba8_premul(&self) -> &[u8] {
        &self.rgba8_premul
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
