//! Error types for huepick-palette

use thiserror::Error;

/// Errors that can occur during palette extraction
#[derive(Debug, Error)]
pub enum PaletteError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] huepick_core::Error),

    /// Color conversion error
    #[error("color error: {0}")]
    Color(#[from] huepick_color::ColorError),

    /// No candidate pixels available for selection
    #[error("no candidate pixels available")]
    NoCandidates,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for palette operations
pub type PaletteResult<T> = Result<T, PaletteError>;
