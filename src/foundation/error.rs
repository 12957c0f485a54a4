/// Convenience alias for results produced by this crate.
pub type SprocketResult<T> = Result<T, SprocketError>;

/// Crate-wide error type.
///
/// The render path itself is infallible (see [`crate::surface::DrawSurface`]);
/// errors surface at construction time — bad configuration, missing or
/// undecodable ornament assets, or an unusable output surface.
#[derive(thiserror::Error, Debug)]
pub enum SprocketError {
    /// Invalid configuration or out-of-range input values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Ornament asset could not be loaded, decoded, or scaled.
    #[error("asset error: {0}")]
    Asset(String),

    /// Output surface could not be created or read back.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped error from an underlying library.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SprocketError {
    /// Build a [`SprocketError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SprocketError::Asset`].
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`SprocketError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
