//! Export errors

use thiserror::Error;

/// Errors raised while rendering a report.
///
/// The original cause is preserved as the error source for diagnostics.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("report rendering failed: {0}")]
    Rendering(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ExportError {
    /// Wraps any underlying layout or serialization failure
    pub fn rendering(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ExportError::Rendering(cause.into())
    }
}
