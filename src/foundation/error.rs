/// Convenience result type used across reelgraph.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy for the few hard failures the compiler surfaces.
///
/// Degenerate animation settings are never errors; they degrade to a renderable fragment and a
/// [`crate::Diagnostic`]. Only structurally missing data and I/O reach this type.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid user-provided timeline or job data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A timeline segment cannot be rendered because required data is absent.
    #[error("unrenderable segment {index}: {reason}")]
    UnrenderableSegment {
        /// Zero-based segment index.
        index: usize,
        /// What is missing.
        reason: String,
    },

    /// Errors when serializing or deserializing settings and jobs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failures spawning or running the external `ffmpeg` binary.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::UnrenderableSegment`] value.
    pub fn unrenderable(index: usize, reason: impl Into<String>) -> Self {
        Self::UnrenderableSegment {
            index,
            reason: reason.into(),
        }
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ReelError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
