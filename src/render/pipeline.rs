use crate::settings::model::StyleSettings;

/// One named stage of the framing pipeline.
///
/// Stages always run in declaration order; later stages draw over earlier ones. Disabled stages
/// are skipped without affecting the relative order of the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Reset the whole surface to transparent.
    Clear,
    /// Solid color or diagonal gradient over the full canvas.
    Background,
    /// Enlarged, blurred, translucent copy of the image (plus gradient wash).
    BlurredBackdrop,
    /// Offset, blurred rounded-rect shadow and the footprint that casts it.
    DropShadow,
    /// The image at natural size, clipped to its rounded rectangle.
    Image,
}

impl Step {
    /// Every stage in execution order.
    pub const ORDER: [Step; 5] = [
        Step::Clear,
        Step::Background,
        Step::BlurredBackdrop,
        Step::DropShadow,
        Step::Image,
    ];

    /// Whether this stage draws anything for `settings`.
    ///
    /// Without a source image only the clear and background stages run.
    pub fn enabled(self, settings: &StyleSettings, has_image: bool) -> bool {
        match self {
            Step::Clear | Step::Background => true,
            Step::BlurredBackdrop => has_image && settings.blur_background,
            Step::DropShadow => has_image && settings.shadow_intensity > 0.0,
            Step::Image => has_image,
        }
    }

    /// Stable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Step::Clear => "clear",
            Step::Background => "background",
            Step::BlurredBackdrop => "blurred_backdrop",
            Step::DropShadow => "drop_shadow",
            Step::Image => "image",
        }
    }
}

/// Stages that will run for `settings`, in order.
pub fn plan(settings: &StyleSettings, has_image: bool) -> Vec<Step> {
    Step::ORDER
        .into_iter()
        .filter(|s| s.enabled(settings, has_image))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
