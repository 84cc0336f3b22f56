/// Convenience result type used across ledtrace.
pub type LedTraceResult<T> = Result<T, LedTraceError>;

/// Top-level error taxonomy used by library APIs.
///
/// Malformed input rows are deliberately absent: they end a rasterization pass early and are
/// reported through [`crate::RasterReport`], never through this type.
#[derive(thiserror::Error, Debug)]
pub enum LedTraceError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The input table could not be opened or read.
    #[error("input error: {0}")]
    Input(String),

    /// The finished canvas could not be written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LedTraceError {
    /// Build a [`LedTraceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LedTraceError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`LedTraceError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
