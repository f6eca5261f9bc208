use serde::{Deserialize, Serialize};

use crate::assets::color::Color;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::layout::dimensions::AspectRatio;

/// Upper bound for [`StyleSettings::shadow_intensity`].
pub const MAX_SHADOW_INTENSITY: f64 = 100.0;

/// Complete framing style for one render.
///
/// Values are immutable snapshots: edits and preset application go through
/// [`StyleSettings::with_patch`], which returns a new value and leaves the original untouched.
/// The JSON form uses the camelCase field names of the settings panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleSettings {
    /// Space between the image and the canvas edge, in logical pixels.
    pub padding: f64,
    /// Corner radius of the framed image, in logical pixels.
    pub border_radius: f64,
    /// Drop shadow strength in `0..=100`; `0` disables the shadow.
    pub shadow_intensity: f64,
    /// Solid background, used when `use_gradient` is off.
    pub background_color: Color,
    /// Gradient color at the top-left corner.
    pub gradient_start: Color,
    /// Gradient color at the bottom-right corner.
    pub gradient_end: Color,
    /// Fill the background with the diagonal gradient instead of the solid color.
    pub use_gradient: bool,
    /// Draw a blurred, enlarged copy of the image behind the frame.
    pub blur_background: bool,
    /// Canvas sizing policy.
    pub aspect_ratio: AspectRatio,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            padding: 48.0,
            border_radius: 16.0,
            shadow_intensity: 30.0,
            background_color: Color::WHITE,
            gradient_start: Color::rgb(0x66, 0x7e, 0xea),
            gradient_end: Color::rgb(0x76, 0x4b, 0xa2),
            use_gradient: false,
            blur_background: false,
            aspect_ratio: AspectRatio::Auto,
        }
    }
}

impl StyleSettings {
    /// Return a copy with every field present in `patch` overwritten.
    pub fn with_patch(&self, patch: &SettingsPatch) -> Self {
        Self {
            padding: patch.padding.unwrap_or(self.padding),
            border_radius: patch.border_radius.unwrap_or(self.border_radius),
            shadow_intensity: patch.shadow_intensity.unwrap_or(self.shadow_intensity),
            background_color: patch.background_color.unwrap_or(self.background_color),
            gradient_start: patch.gradient_start.unwrap_or(self.gradient_start),
            gradient_end: patch.gradient_end.unwrap_or(self.gradient_end),
            use_gradient: patch.use_gradient.unwrap_or(self.use_gradient),
            blur_background: patch.blur_background.unwrap_or(self.blur_background),
            aspect_ratio: patch.aspect_ratio.unwrap_or(self.aspect_ratio),
        }
    }

    /// Check numeric ranges. Colors and aspect ratios are already valid by construction.
    pub fn validate(&self) -> ShotframeResult<()> {
        fn non_negative(name: &str, v: f64) -> ShotframeResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(ShotframeError::validation(format!(
                    "{name} must be a finite number >= 0, got {v}"
                )));
            }
            Ok(())
        }

        non_negative("padding", self.padding)?;
        non_negative("borderRadius", self.border_radius)?;
        non_negative("shadowIntensity", self.shadow_intensity)?;
        if self.shadow_intensity > MAX_SHADOW_INTENSITY {
            return Err(ShotframeError::validation(format!(
                "shadowIntensity must be <= {MAX_SHADOW_INTENSITY}, got {}",
                self.shadow_intensity
            )));
        }
        Ok(())
    }

    /// Parse a settings patch from JSON and apply it onto these settings.
    pub fn with_patch_json(&self, json: &str) -> ShotframeResult<Self> {
        let patch: SettingsPatch = serde_json::from_str(json)
            .map_err(|e| ShotframeError::validation(format!("settings json: {e}")))?;
        let next = self.with_patch(&patch);
        next.validate()?;
        Ok(next)
    }
}

/// Partial settings: every field is optional and only present fields are applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsPatch {
    /// See [`StyleSettings::padding`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    /// See [`StyleSettings::border_radius`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    /// See [`StyleSettings::shadow_intensity`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_intensity: Option<f64>,
    /// See [`StyleSettings::background_color`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// See [`StyleSettings::gradient_start`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_start: Option<Color>,
    /// See [`StyleSettings::gradient_end`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_end: Option<Color>,
    /// See [`StyleSettings::use_gradient`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_gradient: Option<bool>,
    /// See [`StyleSettings::blur_background`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_background: Option<bool>,
    /// See [`StyleSettings::aspect_ratio`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
}

impl SettingsPatch {
    /// Return `true` when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merged(&self, other: &SettingsPatch) -> SettingsPatch {
        SettingsPatch {
            padding: other.padding.or(self.padding),
            border_radius: other.border_radius.or(self.border_radius),
            shadow_intensity: other.shadow_intensity.or(self.shadow_intensity),
            background_color: other.background_color.or(self.background_color),
            gradient_start: other.gradient_start.or(self.gradient_start),
            gradient_end: other.gradient_end.or(self.gradient_end),
            use_gradient: other.use_gradient.or(self.use_gradient),
            blur_background: other.blur_background.or(self.blur_background),
            aspect_ratio: other.aspect_ratio.or(self.aspect_ratio),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/settings/model.rs"]
mod tests;
