//! Error types for figview.

use thiserror::Error;

use crate::figure::FigureKind;

/// The main error type for figview operations.
#[derive(Error, Debug)]
pub enum FigviewError {
    /// A figure with the given uid is already tracked.
    #[error("figure '{0}' already exists")]
    DuplicateFigure(String),

    /// No figure with the given uid is tracked.
    #[error("figure '{0}' not found")]
    FigureNotFound(String),

    /// The figure's kind has no highlight strategy.
    #[error("figure '{uid}' of kind {kind} cannot be highlighted")]
    UnsupportedFigureKind { uid: String, kind: FigureKind },

    /// Screenshot extension is not in the supported set.
    #[error("unsupported image format '{0}'")]
    UnsupportedImageFormat(String),

    /// Screenshot name is not a plain file name inside the screenshot directory.
    #[error("screenshot name '{0}' must be a plain file name")]
    InvalidScreenshotName(String),

    /// The figure is not currently highlighted.
    #[error("figure '{0}' is not highlighted")]
    NotHighlighted(String),

    /// The figure was added without a label source.
    #[error("figure '{0}' has no label source")]
    MissingLabelSource(String),

    /// The figure has no materialized labels.
    #[error("figure '{0}' has no labels shown")]
    LabelsNotShown(String),

    /// Rendering backend error.
    #[error("render error: {0}")]
    RenderError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for figview operations.
pub type Result<T> = std::result::Result<T, FigviewError>;
