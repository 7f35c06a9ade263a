use micropm_layout::LayoutError;
use micropm_render_core::RenderError;
use micropm_traits::{ClipboardError, SinkError};
use thiserror::Error;

/// A comprehensive error type for the export pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Document has no title; a title is required before export")]
    MissingTitle,

    #[error("Layout configuration rejected: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Export delivery failed: {0}")]
    Sink(#[from] SinkError),

    #[error("Copy to clipboard failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
