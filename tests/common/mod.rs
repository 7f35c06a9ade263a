#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use micropm::{DocumentSource, ExportPipeline, PipelineBuilder, PipelineError};
use micropm_traits::{Clipboard, ClipboardError};
use std::sync::atomic::{AtomicUsize, Ordering};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one page, 1-based
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }
}

/// A pipeline with default settings and test logging enabled.
pub fn test_pipeline() -> Result<ExportPipeline, PipelineError> {
    let _ = env_logger::builder().is_test(true).try_init();
    PipelineBuilder::new().build()
}

/// Render `source` to PDF with the default pipeline.
pub fn generate_pdf<S: DocumentSource>(
    source: &S,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let artifact = test_pipeline()?.render_pdf(source)?;
    GeneratedPdf::from_bytes(artifact.content)
}

/// Render `source` to Markdown with the default pipeline.
pub fn generate_markdown<S: DocumentSource>(
    source: &S,
) -> Result<String, Box<dyn std::error::Error>> {
    let artifact = test_pipeline()?.render_markdown(source)?;
    Ok(String::from_utf8(artifact.content)?)
}

/// A clipboard that rejects every write and counts the attempts.
#[derive(Debug, Default)]
pub struct RejectingClipboard {
    attempts: AtomicUsize,
}

impl RejectingClipboard {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Clipboard for RejectingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ClipboardError::WriteFailed("permission denied".to_string()))
    }

    fn name(&self) -> &'static str {
        "RejectingClipboard"
    }
}
