use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// Formats an export can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Markdown,
    Pdf,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(PipelineError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// A rendered export ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    pub fn new(content: Vec<u8>, filename: impl Into<String>, format: ExportFormat) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: filename.into(),
            format,
        }
    }

    /// The content as text, for Markdown exports.
    pub fn as_text(&self) -> Option<&str> {
        match self.format {
            ExportFormat::Markdown => std::str::from_utf8(&self.content).ok(),
            ExportFormat::Pdf => None,
        }
    }

    /// Get the size of the content in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
