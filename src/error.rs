use thiserror::Error;

/// Errors that can occur while exporting the surface to a PNG file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Cannot snapshot an empty surface ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
