use crate::assets::color::Color;
use crate::foundation::core::Rgba8Premul;

/// Two-stop linear gradient running corner to corner, from `(0, 0)` to `(width, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagonalGradient {
    /// Color at `t = 0` (top-left corner).
    pub start: Color,
    /// Color at `t = 1` (bottom-right corner).
    pub end: Color,
}

impl DiagonalGradient {
    /// Gradient between two stops.
    pub fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Straight-alpha color at parameter `t`, clamped to `[0, 1]`.
    ///
    /// Endpoints return the stop colors exactly.
    pub fn color_at(&self, t: f64) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let lerp = |a: u8, b: u8| -> u8 {
            let af = f64::from(a);
            let bf = f64::from(b);
            (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
        };
        Color::rgba(
            lerp(self.start.r, self.end.r),
            lerp(self.start.g, self.end.g),
            lerp(self.start.b, self.end.b),
            lerp(self.start.a, self.end.a),
        )
    }

    /// Gradient parameter of the point `(x, y)` on a `width x height` area.
    ///
    /// The point is projected onto the diagonal, so lines of equal color run perpendicular to it.
    pub fn t_at(x: f64, y: f64, width: f64, height: f64) -> f64 {
        let len2 = width * width + height * height;
        if len2 <= 0.0 {
            return 0.0;
        }
        ((x * width + y * height) / len2).clamp(0.0, 1.0)
    }

    /// Rasterize into a premultiplied RGBA8 buffer of `width x height` pixels.
    ///
    /// Sampling happens at pixel centers. Because the gradient is defined relative to the buffer's
    /// own extent, the result is the same at any output scale.
    pub fn rasterize(&self, width: u32, height: u32) -> Vec<u8> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let (wf, hf) = (f64::from(width), f64::from(height));
        let mut bytes = vec![0u8; (width as usize) * (height as usize) * 4];
        for (y, row) in bytes.chunks_exact_mut((width as usize) * 4).enumerate() {
            let cy = y as f64 + 0.5;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let t = Self::t_at(x as f64 + 0.5, cy, wf, hf);
                px.copy_from_slice(&self.color_at(t).to_rgba8_premul().to_array());
            }
        }
        bytes
    }
}

/// Premultiplied buffer filled with one color.
pub fn rasterize_solid(color: Color, width: u32, height: u32) -> Vec<u8> {
    let px: Rgba8Premul = color.to_rgba8_premul();
    px.to_array().repeat((width as usize) * (height as usize))
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
