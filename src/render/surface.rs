use crate::foundation::core::{CanvasSize, unpremultiply_rgba8_in_place};
use crate::foundation::error::{ShotframeError, ShotframeResult};

/// Largest pixel side the rasterizer can address.
pub const MAX_SURFACE_SIDE: u32 = u16::MAX as u32;

/// Premultiplied RGBA8 drawing target for one render.
///
/// A surface has a logical size (the canvas the settings are laid out on) and an integer output
/// `scale`; its pixel buffer is `canvas * scale` on both axes. All drawing is expressed in
/// logical units and scaled on the way in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    canvas: CanvasSize,
    scale: u32,
    width: u32,
    height: u32,
    pub(crate) data: Vec<u8>,
}

impl Surface {
    /// Allocate a transparent surface for `canvas` at `scale`.
    ///
    /// Fails with [`ShotframeError::SurfaceUnavailable`] for a zero scale, an empty canvas or a
    /// pixel size the rasterizer cannot handle.
    pub fn new(canvas: CanvasSize, scale: u32) -> ShotframeResult<Self> {
        if scale == 0 {
            return Err(ShotframeError::surface("scale must be >= 1"));
        }
        if canvas.width == 0 || canvas.height == 0 {
            return Err(ShotframeError::surface(format!(
                "canvas {canvas} has no pixels"
            )));
        }
        let px = canvas.scaled(scale)?;
        if px.width > MAX_SURFACE_SIDE || px.height > MAX_SURFACE_SIDE {
            return Err(ShotframeError::surface(format!(
                "surface {px} exceeds {MAX_SURFACE_SIDE} px per side"
            )));
        }
        let len = (px.width as usize) * (px.height as usize) * 4;
        Ok(Self {
            canvas,
            scale,
            width: px.width,
            height: px.height,
            data: vec![0u8; len],
        })
    }

    /// 1x surface for interactive preview.
    pub fn preview(canvas: CanvasSize) -> ShotframeResult<Self> {
        Self::new(canvas, 1)
    }

    /// Logical canvas size.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Output scale factor.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Width of the pixel buffer.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the pixel buffer.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 pixels, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)` in buffer coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Straight-alpha copy of the pixels, as expected by image encoders.
    pub fn to_rgba_image(&self) -> ShotframeResult<image::RgbaImage> {
        let mut rgba = self.data.clone();
        unpremultiply_rgba8_in_place(&mut rgba);
        image::RgbaImage::from_raw(self.width, self.height, rgba)
            .ok_or_else(|| ShotframeError::encode("surface buffer does not match its size"))
    }

    pub(crate) fn pixel_size_u16(&self) -> (u16, u16) {
        // Bounded by MAX_SURFACE_SIDE at construction.
        (self.width as u16, self.height as u16)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
