/// Convenience result type used across tilepaint.
pub type TilePaintResult<T> = Result<T, TilePaintError>;

/// Top-level error taxonomy used by tile rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum TilePaintError {
    /// Invalid theme or job data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A draw instruction was added before any drawing layer was selected.
    #[error("no drawing layer selected")]
    NoDrawingLayer,

    /// A draw instruction targeted a level the theme does not provide.
    #[error("level {level} out of range (theme provides {levels} levels)")]
    LevelOutOfRange {
        /// Requested level index.
        level: usize,
        /// Level count captured from the theme.
        levels: usize,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TilePaintError {
    /// Build a [`TilePaintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TilePaintError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
