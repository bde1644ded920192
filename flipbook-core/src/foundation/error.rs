/// Convenience result type used across Flipbook.
pub type FlipbookResult<T> = Result<T, FlipbookError>;

/// Top-level error taxonomy used by authoring APIs.
#[derive(thiserror::Error, Debug)]
pub enum FlipbookError {
    /// A command argument had the wrong shape or type.
    #[error("type error: {0}")]
    Type(String),

    /// A command ran before the context it needs (initialized meta, open
    /// clip) existed.
    #[error("state error: {0}")]
    State(String),

    /// The authoring script could not be read or parsed.
    #[error("load error: {0}")]
    Load(String),

    /// A runtime fault while executing the authoring script.
    #[error("script error: {0}")]
    Script(String),

    /// Errors when serializing or deserializing the document.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlipbookError {
    /// Build a [`FlipbookError::Type`] value.
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    /// Build a [`FlipbookError::State`] value.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Build a [`FlipbookError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`FlipbookError::Script`] value.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Build a [`FlipbookError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
