//! Structured error types for gridlay.

/// All errors that can occur while validating layout inputs.
///
/// Layout computation itself is infallible: a size-provider violation during
/// a build is reported through `tracing` and substituted with a zero-size
/// cell (see [`crate::layout::AttributeTable::build`]). This type exists for
/// hosts that want to validate a source up front and fail hard instead.
#[derive(Debug, thiserror::Error)]
pub enum GridlayError {
    /// The size provider returned no size for an in-range coordinate.
    #[error("size provider returned no size for cell ({row}, {col})")]
    SizeProvider { row: u32, col: u32 },

    /// The size provider returned a negative dimension.
    #[error("size provider returned a negative size for cell ({row}, {col})")]
    NegativeSize { row: u32, col: u32 },

    /// Catch-all for host-integration errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridlayError>;

impl From<String> for GridlayError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridlayError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}
