/// Convenience result type used across stagecraft.
pub type StageResult<T> = Result<T, StageError>;

/// Top-level error taxonomy used by construction and mount APIs.
///
/// Per-frame evaluation never fails: everything that can go wrong is caught
/// while a scene is being built.
#[derive(thiserror::Error, Debug)]
pub enum StageError {
    /// Malformed content records or builder arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown channel names or unusable motion bindings.
    #[error("binding error: {0}")]
    Binding(String),

    /// No usable time source when a scene mounts.
    #[error("clock error: {0}")]
    Clock(String),

    /// The render engine cannot honor something the scene asks for.
    #[error("capability error: {0}")]
    Capability(String),

    /// Errors when serializing or deserializing content tables.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StageError {
    /// Build a [`StageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StageError::Binding`] value.
    pub fn binding(msg: impl Into<String>) -> Self {
        Self::Binding(msg.into())
    }

    /// Build a [`StageError::Clock`] value.
    pub fn clock(msg: impl Into<String>) -> Self {
        Self::Clock(msg.into())
    }

    /// Build a [`StageError::Capability`] value.
    pub fn capability(msg: impl Into<String>) -> Self {
        Self::Capability(msg.into())
    }

    /// Build a [`StageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
