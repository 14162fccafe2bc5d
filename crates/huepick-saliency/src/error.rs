//! Error types for huepick-saliency

use thiserror::Error;

/// Errors that can occur during saliency estimation
#[derive(Debug, Error)]
pub enum SaliencyError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] huepick_core::Error),

    /// Color conversion error
    #[error("color error: {0}")]
    Color(#[from] huepick_color::ColorError),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for saliency operations
pub type SaliencyResult<T> = Result<T, SaliencyError>;
