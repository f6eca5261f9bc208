//! Shotframe turns a raw screenshot into a presentation-ready image.
//!
//! The source image is centered on a canvas sized by padding and an aspect-ratio policy, over a
//! solid or gradient background, optionally with a blurred copy of itself behind it, a drop
//! shadow and rounded corners. The same render runs at 1x for previews and at 2x for export:
//!
//! - Resolve the canvas with [`resolve`]
//! - Render into a [`Surface`] with [`render`]
//! - Encode with [`export_render`], or drive everything through an [`EditorSession`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Color values and source image decoding.
pub mod assets;
/// Export encoding and sinks.
pub mod encode;
/// Canvas sizing.
pub mod layout;
/// Compositor and drawing surfaces.
pub mod render;
/// Editing session.
pub mod session;
/// Style settings and presets.
pub mod settings;

pub use crate::foundation::core::{
    Affine, CanvasSize, Point, Rect, Rgba8Premul, RoundedRect, Vec2,
};
pub use crate::foundation::error::{ShotframeError, ShotframeResult};

pub use crate::assets::color::Color;
pub use crate::assets::decode::SourceImage;
pub use crate::encode::export::{
    DEFAULT_EXPORT_SCALE, EncodedImage, ExportFormat, ExportOptions, encode_surface, export_render,
};
pub use crate::encode::sink::{ExportSink, FileSink, FileTarget, InMemorySink};
pub use crate::layout::dimensions::{AspectRatio, resolve};
pub use crate::render::compositor::{placement, render, render_preview};
pub use crate::render::pipeline::{Step, plan};
pub use crate::render::surface::Surface;
pub use crate::session::editor::EditorSession;
pub use crate::settings::model::{SettingsPatch, StyleSettings};
pub use crate::settings::presets::{Preset, find_preset, presets};
