use thiserror::Error;

/// Errors surfaced by canvas export, the download sinks and the web asset writer.
///
/// Drawing itself never fails: with no surface attached every drawing
/// operation is a silent no-op.
#[derive(Debug, Error)]
pub enum WhiteboardError {
    #[error("Drawing surface is not available")]
    SurfaceUnavailable,

    #[error("Drawing surface has zero area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("Surface keeps no pixels to encode")]
    NoPixels,

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to serialize: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Download(String),
}

/// Result type for export operations
pub type WhiteboardResult<T> = Result<T, WhiteboardError>;
