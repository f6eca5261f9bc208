//! CPU compositor.
//!
//! A render is an ordered list of pipeline steps (background, blurred backdrop, drop shadow,
//! image) executed against a [`surface::Surface`] whose scale factor drives all geometry.

pub(crate) mod blur;
pub(crate) mod composite;
/// Pipeline step execution and placement geometry.
pub mod compositor;
pub(crate) mod gradient;
/// Ordered step list and enablement rules.
pub mod pipeline;
pub(crate) mod raster;
/// Owned premultiplied RGBA8 drawing surface.
pub mod surface;
