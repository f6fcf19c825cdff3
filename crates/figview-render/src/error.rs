//! Rendering error types.

use figview_core::FigviewError;
use thiserror::Error;

use crate::actor::ActorId;

/// Errors that can occur during rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The actor is not part of the scene.
    #[error("unknown actor {0}")]
    UnknownActor(ActorId),

    /// A draw option is outside its valid range.
    #[error("invalid draw option: {0}")]
    InvalidOption(String),

    /// Failed to write an image file.
    #[error("failed to save image: {0}")]
    IoError(#[from] std::io::Error),

    /// Image encoding error.
    #[error("image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    /// Pixel buffer does not match the image size.
    #[error("invalid image data")]
    InvalidImageData,

    /// The image format cannot be encoded.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

impl From<RenderError> for FigviewError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::IoError(e) => FigviewError::IoError(e),
            RenderError::UnsupportedFormat(ext) => FigviewError::UnsupportedImageFormat(ext),
            other => FigviewError::RenderError(other.to_string()),
        }
    }
}
