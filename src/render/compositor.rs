use crate::assets::color::Color;
use crate::assets::decode::SourceImage;
use crate::foundation::core::{Affine, CanvasSize, Rect};
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::render::blur::gaussian_blur_rgba8_premul;
use crate::render::composite::over_in_place;
use crate::render::gradient::{DiagonalGradient, rasterize_solid};
use crate::render::pipeline::{Step, plan};
use crate::render::raster::{LayerPainter, affine_to_cpu, image_paint, rounded_rect_path};
use crate::render::surface::Surface;
use crate::settings::model::StyleSettings;

/// How far the blurred backdrop overflows each canvas edge, in logical pixels.
pub const BACKDROP_OVERFLOW: f64 = 50.0;
/// Gaussian sigma of the blurred backdrop, in logical pixels.
pub const BACKDROP_BLUR_SIGMA: f64 = 30.0;
/// Opacity of the blurred backdrop.
pub const BACKDROP_OPACITY: f32 = 0.6;
/// Alpha multiplied into both gradient stops for the wash over the backdrop.
pub const GRADIENT_WASH_ALPHA: u8 = 0x80;

/// Shadow parameters derived from an intensity in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowParams {
    /// Shadow color alpha in `0..=1`.
    pub alpha: f64,
    /// Gaussian sigma in logical pixels.
    pub sigma: f64,
    /// Downward offset in logical pixels.
    pub offset_y: f64,
}

impl ShadowParams {
    /// Map an intensity to shadow parameters; all three grow monotonically with it.
    ///
    /// The blur matches a canvas `shadowBlur` equal to the intensity, i.e. a sigma of half of it.
    pub fn from_intensity(intensity: f64) -> Self {
        let i = intensity.clamp(0.0, 100.0);
        Self {
            alpha: i / 100.0,
            sigma: i / 2.0,
            offset_y: i / 3.0,
        }
    }
}

/// Logical rectangle the image occupies: natural size, centered on the canvas.
pub fn placement(canvas: CanvasSize, image: &SourceImage) -> Rect {
    let iw = f64::from(image.width());
    let ih = f64::from(image.height());
    let x = (f64::from(canvas.width) - iw) / 2.0;
    let y = (f64::from(canvas.height) - ih) / 2.0;
    Rect::new(x, y, x + iw, y + ih)
}

/// Render `image` framed by `settings` into `surface`.
///
/// The surface's canvas size and scale drive all geometry, so the same call serves the 1x
/// preview and a 2x export. Without an image only the background is drawn. A missing surface is
/// reported as [`ShotframeError::SurfaceUnavailable`]; on any error the surface is left as it was.
#[tracing::instrument(skip_all, fields(has_image = image.is_some()))]
pub fn render(
    surface: Option<&mut Surface>,
    image: Option<&SourceImage>,
    settings: &StyleSettings,
) -> ShotframeResult<()> {
    let Some(surface) = surface else {
        return Err(ShotframeError::surface("no drawing surface provided"));
    };
    let mut frame = FrameRenderer::new(surface, image, settings)?;
    for step in plan(settings, image.is_some()) {
        tracing::debug!(step = step.name(), "pipeline step");
        frame.run(step)?;
    }
    surface.data = frame.buf;
    Ok(())
}

/// Render a fresh 1x preview surface for `canvas`.
pub fn render_preview(
    canvas: CanvasSize,
    image: Option<&SourceImage>,
    settings: &StyleSettings,
) -> ShotframeResult<Surface> {
    let mut surface = Surface::preview(canvas)?;
    render(Some(&mut surface), image, settings)?;
    Ok(surface)
}

/// Per-call state: accumulation buffer plus everything derived from the inputs.
struct FrameRenderer<'a> {
    settings: &'a StyleSettings,
    image: Option<(&'a SourceImage, vello_cpu::Image)>,
    canvas: CanvasSize,
    scale: f64,
    width: u32,
    height: u32,
    painter: LayerPainter,
    buf: Vec<u8>,
}

impl<'a> FrameRenderer<'a> {
    fn new(
        surface: &Surface,
        image: Option<&'a SourceImage>,
        settings: &'a StyleSettings,
    ) -> ShotframeResult<Self> {
        let image = match image {
            Some(img) => Some((img, image_paint(img)?)),
            None => None,
        };
        let (w16, h16) = surface.pixel_size_u16();
        Ok(Self {
            settings,
            image,
            canvas: surface.canvas(),
            scale: f64::from(surface.scale()),
            width: surface.width(),
            height: surface.height(),
            painter: LayerPainter::new(w16, h16),
            buf: vec![0u8; surface.data().len()],
        })
    }

    fn run(&mut self, step: Step) -> ShotframeResult<()> {
        match step {
            Step::Clear => {
                self.buf.fill(0);
                Ok(())
            }
            Step::Background => self.background(),
            Step::BlurredBackdrop => self.blurred_backdrop(),
            Step::DropShadow => self.drop_shadow(),
            Step::Image => self.image(),
        }
    }

    fn background(&mut self) -> ShotframeResult<()> {
        let s = self.settings;
        let layer = if s.use_gradient {
            DiagonalGradient::new(s.gradient_start, s.gradient_end).rasterize(self.width, self.height)
        } else {
            rasterize_solid(s.background_color, self.width, self.height)
        };
        over_in_place(&mut self.buf, &layer, 1.0)
    }

    fn blurred_backdrop(&mut self) -> ShotframeResult<()> {
        let (src, paint) = self.source()?;
        let iw = f64::from(src.width());
        let ih = f64::from(src.height());
        let cw = f64::from(self.canvas.width);
        let ch = f64::from(self.canvas.height);
        let m = BACKDROP_OVERFLOW;

        let tr = Affine::scale(self.scale)
            * Affine::translate((-m, -m))
            * Affine::scale_non_uniform((cw + 2.0 * m) / iw, (ch + 2.0 * m) / ih);
        let layer = self.painter.paint(|ctx| {
            ctx.set_transform(affine_to_cpu(tr));
            ctx.set_paint(paint);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, iw, ih));
        });
        let sigma = (BACKDROP_BLUR_SIGMA * self.scale) as f32;
        let blurred = gaussian_blur_rgba8_premul(&layer, self.width, self.height, sigma)?;
        over_in_place(&mut self.buf, &blurred, BACKDROP_OPACITY)?;

        if self.settings.use_gradient {
            let wash = DiagonalGradient::new(
                self.settings.gradient_start.with_alpha_scaled(GRADIENT_WASH_ALPHA),
                self.settings.gradient_end.with_alpha_scaled(GRADIENT_WASH_ALPHA),
            )
            .rasterize(self.width, self.height);
            over_in_place(&mut self.buf, &wash, 1.0)?;
        }
        Ok(())
    }

    fn drop_shadow(&mut self) -> ShotframeResult<()> {
        let (src, _) = self.source()?;
        let rect = placement(self.canvas, src);
        let path = rounded_rect_path(rect.width(), rect.height(), self.settings.border_radius);
        let shadow = ShadowParams::from_intensity(self.settings.shadow_intensity);
        let alpha = (shadow.alpha * 255.0).round().clamp(0.0, 255.0) as u8;

        let tr = Affine::scale(self.scale) * Affine::translate((rect.x0, rect.y0 + shadow.offset_y));
        let layer = self.painter.paint(|ctx| {
            ctx.set_transform(affine_to_cpu(tr));
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, alpha));
            ctx.fill_path(&path);
        });
        let sigma = (shadow.sigma * self.scale) as f32;
        let blurred = gaussian_blur_rgba8_premul(&layer, self.width, self.height, sigma)?;
        over_in_place(&mut self.buf, &blurred, 1.0)?;

        // The footprint casting the shadow; the image lands exactly on top of it.
        let tr = Affine::scale(self.scale) * Affine::translate((rect.x0, rect.y0));
        let white = Color::WHITE;
        let footprint = self.painter.paint(|ctx| {
            ctx.set_transform(affine_to_cpu(tr));
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                white.r, white.g, white.b, white.a,
            ));
            ctx.fill_path(&path);
        });
        over_in_place(&mut self.buf, &footprint, 1.0)
    }

    fn image(&mut self) -> ShotframeResult<()> {
        let (src, paint) = self.source()?;
        let rect = placement(self.canvas, src);
        let path = rounded_rect_path(rect.width(), rect.height(), self.settings.border_radius);

        let tr = Affine::scale(self.scale) * Affine::translate((rect.x0, rect.y0));
        let layer = self.painter.paint(|ctx| {
            ctx.set_transform(affine_to_cpu(tr));
            ctx.set_paint(paint);
            ctx.fill_path(&path);
        });
        over_in_place(&mut self.buf, &layer, 1.0)
    }

    fn source(&self) -> ShotframeResult<(&'a SourceImage, vello_cpu::Image)> {
        self.image
            .as_ref()
            .map(|(img, paint)| (*img, paint.clone()))
            .ok_or(ShotframeError::NoImage)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
