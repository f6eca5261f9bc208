//! Source image decoding and color values.

/// Parsed RGBA colors with hex (de)serialization.
pub mod color;
/// PNG / JPEG / WebP decoding into premultiplied rasters.
pub mod decode;
