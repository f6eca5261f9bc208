//! Export encoding and delivery.
//!
//! Exports re-run the compositor on a fresh higher-resolution surface and serialize the result.

/// PNG / JPEG / WebP export.
pub mod export;
/// Export sink trait and built-in sinks.
pub mod sink;
