use std::path::Path;

use crate::assets::decode::SourceImage;
use crate::encode::export::{EncodedImage, ExportOptions, export_render};
use crate::encode::sink::ExportSink;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::layout::dimensions::resolve;
use crate::render::compositor::render_preview;
use crate::render::surface::Surface;
use crate::settings::model::{SettingsPatch, StyleSettings};
use crate::settings::presets::find_preset;

/// Canvas used for the preview while no image is loaded.
pub const EMPTY_CANVAS: CanvasSize = CanvasSize {
    width: 800,
    height: 600,
};

/// Editing state for one screenshot: the loaded image plus the current style.
///
/// Settings are replaced wholesale on every edit; nothing is mutated in place and there is no
/// history.
#[derive(Clone, Debug, Default)]
pub struct EditorSession {
    image: Option<SourceImage>,
    settings: StyleSettings,
}

impl EditorSession {
    /// New session with default settings and no image.
    pub fn new() -> Self {
        Self::default()
    }

    /// New session starting from `settings`.
    pub fn with_settings(settings: StyleSettings) -> ShotframeResult<Self> {
        settings.validate()?;
        Ok(Self {
            image: None,
            settings,
        })
    }

    /// Replace the current image.
    pub fn load_image(&mut self, image: SourceImage) {
        tracing::debug!(width = image.width(), height = image.height(), "image loaded");
        self.image = Some(image);
    }

    /// Decode and load an image file. On failure the previous image is kept.
    pub fn load_image_path(&mut self, path: impl AsRef<Path>) -> ShotframeResult<()> {
        let image = SourceImage::from_path(path)?;
        self.load_image(image);
        Ok(())
    }

    /// Drop the current image.
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Currently loaded image, if any.
    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// Current settings.
    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    /// Replace the settings after validating them.
    pub fn replace_settings(&mut self, settings: StyleSettings) -> ShotframeResult<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Apply a partial edit. Invalid results are rejected and the current settings kept.
    pub fn apply_patch(&mut self, patch: &SettingsPatch) -> ShotframeResult<()> {
        self.replace_settings(self.settings.with_patch(patch))
    }

    /// Apply a preset from the catalog by id.
    pub fn apply_preset(&mut self, id: &str) -> ShotframeResult<()> {
        let preset = find_preset(id)
            .ok_or_else(|| ShotframeError::validation(format!("unknown preset \"{id}\"")))?;
        tracing::debug!(preset = preset.id, "applying preset");
        self.replace_settings(preset.apply(&self.settings))
    }

    /// Logical canvas size for the current image and settings.
    #[tracing::instrument(skip(self), fields(has_image = self.image.is_some()))]
    pub fn canvas_size(&self) -> CanvasSize {
        match &self.image {
            Some(img) => resolve(
                self.settings.aspect_ratio,
                img.width(),
                img.height(),
                self.settings.padding,
            ),
            None => EMPTY_CANVAS,
        }
    }

    /// Render the 1x preview.
    pub fn preview(&self) -> ShotframeResult<Surface> {
        render_preview(self.canvas_size(), self.image.as_ref(), &self.settings)
    }

    /// Render and encode the current state for download.
    pub fn export(&self, opts: &ExportOptions) -> ShotframeResult<EncodedImage> {
        export_render(self.canvas_size(), self.image.as_ref(), &self.settings, opts)
    }

    /// Export and hand the result to `sink`.
    pub fn export_to(
        &self,
        opts: &ExportOptions,
        sink: &mut dyn ExportSink,
    ) -> ShotframeResult<Option<std::path::PathBuf>> {
        let encoded = self.export(opts)?;
        sink.deliver(&encoded)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/editor.rs"]
mod tests;
