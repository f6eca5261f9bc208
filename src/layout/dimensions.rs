use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::CanvasSize;
use crate::foundation::error::ShotframeError;

/// Canvas sizing policy around the padded image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Square canvas.
    #[serde(rename = "1:1")]
    Square,
    /// Landscape 16:9.
    #[serde(rename = "16:9")]
    Landscape16x9,
    /// Portrait 4:5.
    #[serde(rename = "4:5")]
    Portrait4x5,
    /// Portrait 9:16.
    #[serde(rename = "9:16")]
    Portrait9x16,
    /// Canvas hugs the image plus padding.
    #[default]
    #[serde(rename = "auto")]
    Auto,
}

impl AspectRatio {
    /// All policies in the order they are presented to users.
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Auto,
        AspectRatio::Square,
        AspectRatio::Landscape16x9,
        AspectRatio::Portrait4x5,
        AspectRatio::Portrait9x16,
    ];

    /// Short label, also the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape16x9 => "16:9",
            AspectRatio::Portrait4x5 => "4:5",
            AspectRatio::Portrait9x16 => "9:16",
            AspectRatio::Auto => "auto",
        }
    }

    /// Target `width / height`, or `None` for [`AspectRatio::Auto`].
    pub fn ratio(self) -> Option<(f64, f64)> {
        match self {
            AspectRatio::Square => Some((1.0, 1.0)),
            AspectRatio::Landscape16x9 => Some((16.0, 9.0)),
            AspectRatio::Portrait4x5 => Some((4.0, 5.0)),
            AspectRatio::Portrait9x16 => Some((9.0, 16.0)),
            AspectRatio::Auto => None,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = ShotframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AspectRatio::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ShotframeError::validation(format!(
                    "unknown aspect ratio \"{s}\" (expected auto, 1:1, 16:9, 4:5 or 9:16)"
                ))
            })
    }
}

/// Resolve the canvas size for an image of `image_width x image_height` framed by `padding`.
///
/// The content box is the image plus padding on every side. Fixed ratios grow whichever side is
/// short until the ratio is met; the canvas never shrinks below the content box, so the image is
/// never cropped. Fractional sides are floored to whole pixels.
pub fn resolve(
    aspect: AspectRatio,
    image_width: u32,
    image_height: u32,
    padding: f64,
) -> CanvasSize {
    let padding = if padding.is_finite() {
        padding.max(0.0)
    } else {
        0.0
    };
    let content_w = f64::from(image_width) + padding * 2.0;
    let content_h = f64::from(image_height) + padding * 2.0;

    let (w, h) = match aspect.ratio() {
        None => (content_w, content_h),
        Some((rw, rh)) if rw == rh => {
            let size = content_w.max(content_h);
            (size, size)
        }
        Some((rw, rh)) => (
            content_w.max(content_h * rw / rh),
            content_h.max(content_w * rh / rw),
        ),
    };

    CanvasSize::new(to_px(w), to_px(h))
}

fn to_px(v: f64) -> u32 {
    v.floor().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/dimensions.rs"]
mod tests;
