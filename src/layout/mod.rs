/// Aspect-ratio policies and canvas size resolution.
pub mod dimensions;
