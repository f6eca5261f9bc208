use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use image::ImageEncoder;
use serde::{Deserialize, Serialize};

use crate::assets::decode::SourceImage;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::render::compositor::render;
use crate::render::surface::Surface;
use crate::settings::model::StyleSettings;

/// Default scale for file export.
pub const DEFAULT_EXPORT_SCALE: u32 = 2;
/// Default quality for lossy formats.
pub const DEFAULT_QUALITY: f32 = 0.95;

/// Encoded output container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless PNG; quality is ignored.
    #[default]
    Png,
    /// Baseline JPEG; transparency is flattened onto black.
    Jpeg,
    /// WebP.
    #[serde(rename = "webp")]
    WebP,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
        }
    }

    /// MIME type of the encoded bytes.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::WebP => "image/webp",
        }
    }

    /// Guess the format from a path's extension.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::WebP => "webp",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = ShotframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            "webp" => Ok(ExportFormat::WebP),
            other => Err(ShotframeError::validation(format!(
                "unknown export format \"{other}\" (expected png, jpeg or webp)"
            ))),
        }
    }
}

/// Export parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Output container.
    pub format: ExportFormat,
    /// Quality in `0..=1` for JPEG and WebP.
    pub quality: f32,
    /// Integer pixel scale over the logical canvas.
    pub scale: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            quality: DEFAULT_QUALITY,
            scale: DEFAULT_EXPORT_SCALE,
        }
    }
}

impl ExportOptions {
    /// Options for `format` with the default quality and scale.
    pub fn with_format(format: ExportFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    fn validate(&self) -> ShotframeResult<()> {
        if !self.quality.is_finite() || !(0.0..=1.0).contains(&self.quality) {
            return Err(ShotframeError::validation(format!(
                "export quality must be in 0..=1, got {}",
                self.quality
            )));
        }
        Ok(())
    }
}

/// Encoded export result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// Container of `bytes`.
    pub format: ExportFormat,
    /// Pixel width of the encoded image.
    pub width: u32,
    /// Pixel height of the encoded image.
    pub height: u32,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
}

/// Render `image` framed by `settings` into a fresh surface at `opts.scale` and encode it.
///
/// The pipeline runs again from scratch at the higher resolution; the preview bitmap is never
/// upscaled. Without an image this fails with [`ShotframeError::NoImage`] and produces no bytes.
#[tracing::instrument(skip(image, settings), fields(has_image = image.is_some()))]
pub fn export_render(
    canvas: CanvasSize,
    image: Option<&SourceImage>,
    settings: &StyleSettings,
    opts: &ExportOptions,
) -> ShotframeResult<EncodedImage> {
    let Some(image) = image else {
        tracing::warn!("export requested without a source image");
        return Err(ShotframeError::NoImage);
    };
    opts.validate()?;

    let mut surface = Surface::new(canvas, opts.scale)?;
    render(Some(&mut surface), Some(image), settings)?;
    let encoded = encode_surface(&surface, opts.format, opts.quality)?;
    tracing::debug!(
        format = %encoded.format,
        width = encoded.width,
        height = encoded.height,
        bytes = encoded.bytes.len(),
        "exported"
    );
    Ok(encoded)
}

/// Serialize a rendered surface.
pub fn encode_surface(
    surface: &Surface,
    format: ExportFormat,
    quality: f32,
) -> ShotframeResult<EncodedImage> {
    let (width, height) = (surface.width(), surface.height());
    let mut bytes = Vec::new();
    let cursor = Cursor::new(&mut bytes);

    match format {
        ExportFormat::Png => {
            let rgba = surface.to_rgba_image()?;
            image::codecs::png::PngEncoder::new(cursor)
                .write_image(rgba.as_raw(), width, height, image::ExtendedColorType::Rgba8)
                .map_err(|e| ShotframeError::encode(format!("png: {e}")))?;
        }
        ExportFormat::Jpeg => {
            // Premultiplied color with alpha dropped is exactly "over black".
            let rgb: Vec<u8> = surface
                .data()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            image::codecs::jpeg::JpegEncoder::new_with_quality(cursor, jpeg_quality(quality))
                .write_image(&rgb, width, height, image::ExtendedColorType::Rgb8)
                .map_err(|e| ShotframeError::encode(format!("jpeg: {e}")))?;
        }
        ExportFormat::WebP => {
            // The pure-Rust encoder is lossless only; lower qualities quantize the color channels
            // first so the output compresses better.
            let mut rgba = surface.to_rgba_image()?;
            quantize_rgb(&mut rgba, percent_quality(quality));
            image::codecs::webp::WebPEncoder::new_lossless(cursor)
                .write_image(rgba.as_raw(), width, height, image::ExtendedColorType::Rgba8)
                .map_err(|e| ShotframeError::encode(format!("webp: {e}")))?;
        }
    }

    Ok(EncodedImage {
        format,
        width,
        height,
        bytes,
    })
}

fn percent_quality(quality: f32) -> u8 {
    (quality.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn jpeg_quality(quality: f32) -> u8 {
    percent_quality(quality).clamp(1, 100)
}

fn quantize_rgb(data: &mut [u8], quality: u8) {
    if quality >= 100 {
        return;
    }
    let levels = quantize_levels(quality);
    let step = 255.0 / (f32::from(levels) - 1.0);
    for pixel in data.chunks_exact_mut(4) {
        for channel in pixel.iter_mut().take(3) {
            let bucket = (f32::from(*channel) / step).round();
            *channel = (bucket * step).round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Finer palettes at high quality, aggressively coarse ones at low quality.
fn quantize_levels(quality: u8) -> u16 {
    if quality >= 100 {
        return 256;
    }
    let normalized = f32::from(quality).clamp(1.0, 100.0) / 100.0;
    let levels = 2.0 + normalized * normalized * 254.0;
    levels.round().clamp(2.0, 256.0) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/encode/export.rs"]
mod tests;
