//! Framing style values and the preset catalog.

/// `StyleSettings` and partial edits.
pub mod model;
/// Built-in presets.
pub mod presets;
