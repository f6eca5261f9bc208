//! Glue between the compositor and `vello_cpu`.
//!
//! `vello_cpu` always renders into a fresh buffer, so each drawing step paints a full-size layer
//! here and the compositor blends it onto its accumulation buffer.

use std::sync::Arc;

use kurbo::Shape;

use crate::assets::decode::SourceImage;
use crate::foundation::core::{Affine, RoundedRect};
use crate::foundation::error::{ShotframeError, ShotframeResult};

/// Flattening tolerance for curved outlines, in device pixels.
const PATH_TOLERANCE: f64 = 0.1;

/// Paints layers of a fixed pixel size.
pub(crate) struct LayerPainter {
    width: u16,
    height: u16,
}

impl LayerPainter {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Run `draw` against a fresh context and return the premultiplied RGBA8 result.
    pub(crate) fn paint(&self, draw: impl FnOnce(&mut vello_cpu::RenderContext)) -> Vec<u8> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        draw(&mut ctx);
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}

/// Wrap a decoded source image as a `vello_cpu` image paint.
pub(crate) fn image_paint(image: &SourceImage) -> ShotframeResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(image.rgba8_premul(), image.width(), image.height())?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

/// Rounded rectangle anchored at the origin, radius clamped to half the shorter side.
pub(crate) fn rounded_rect_path(width: f64, height: f64, radius: f64) -> vello_cpu::kurbo::BezPath {
    let max_radius = (width.min(height) / 2.0).max(0.0);
    let radius = if radius.is_finite() {
        radius.clamp(0.0, max_radius)
    } else {
        0.0
    };
    let rr = RoundedRect::new(0.0, 0.0, width, height, radius);
    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in rr.path_elements(PATH_TOLERANCE) {
        p.push(el);
    }
    p
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> ShotframeResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ShotframeError::validation("source image width exceeds 65535 px"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ShotframeError::validation("source image height exceeds 65535 px"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(ShotframeError::validation("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
