/// Convenience result type used across Stickgen.
pub type StickgenResult<T> = Result<T, StickgenError>;

/// Top-level error taxonomy used by the pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum StickgenError {
    /// Invalid caller-provided configuration or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or writing frame images.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while reading frames or writing sprite sheets.
    #[error("pack error: {0}")]
    Pack(String),

    /// Errors when serializing or deserializing metadata.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StickgenError {
    /// Build a [`StickgenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StickgenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StickgenError::Pack`] value.
    pub fn pack(msg: impl Into<String>) -> Self {
        Self::Pack(msg.into())
    }

    /// Build a [`StickgenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
