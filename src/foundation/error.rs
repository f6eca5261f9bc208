/// Convenience result type used across shotframe.
pub type ShotframeResult<T> = Result<T, ShotframeError>;

/// Top-level error taxonomy used by the library APIs.
///
/// Absence of input (no image loaded, no drawing surface) is reported through dedicated variants
/// so callers can turn it into a user-facing message instead of treating it as a crash.
#[derive(thiserror::Error, Debug)]
pub enum ShotframeError {
    /// Invalid user-provided settings or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// The source bytes could not be decoded into a raster.
    #[error("decode error: {0}")]
    Decode(String),

    /// The rendered surface could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),

    /// An operation that needs a source image was invoked without one.
    #[error("no source image loaded")]
    NoImage,

    /// No drawing surface was supplied, or one of the requested size cannot be allocated.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShotframeError {
    /// Build a [`ShotframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShotframeError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ShotframeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ShotframeError::SurfaceUnavailable`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Return `true` for the "nothing to render" conditions (missing image or surface).
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::NoImage | Self::SurfaceUnavailable(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
