use super::config::ExportConfig;
use crate::builders::DocumentSource;
use crate::error::PipelineError;
use crate::export::{CommandClipboard, ExportFormat, ExportedDocument, export_filename};
use log::{info, warn};
use micropm_layout::{LayoutEngine, Page};
use micropm_markdown::{render_markdown, render_markdown_collection};
use micropm_render_core::DocumentInfo;
use micropm_render_lopdf::render_pages;
use micropm_traits::{Clipboard, ExportSink};
use micropm_types::Document;

/// Turns tool state into delivered artifacts.
///
/// Holds no per-export state: every call builds its own document, pages and
/// buffer and drops them on return.
#[derive(Debug, Clone)]
pub struct ExportPipeline {
    engine: LayoutEngine,
    config: ExportConfig,
}

impl ExportPipeline {
    pub(super) fn new(engine: LayoutEngine, config: ExportConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn layout_engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Builds the document for `source`, rejecting it when the title is blank.
    pub fn document<S: DocumentSource + ?Sized>(&self, source: &S) -> Result<Document, PipelineError> {
        let doc = source.to_document();
        if !doc.has_title() {
            return Err(PipelineError::MissingTitle);
        }
        Ok(doc)
    }

    /// Lays `source` out without encoding it.
    pub fn paginate<S: DocumentSource + ?Sized>(&self, source: &S) -> Result<Vec<Page>, PipelineError> {
        let doc = self.document(source)?;
        Ok(self.engine.render_document(&doc))
    }

    pub fn render_markdown<S: DocumentSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<ExportedDocument, PipelineError> {
        let doc = self.document(source)?;
        Ok(ExportedDocument::new(
            render_markdown(&doc).into_bytes(),
            self.filename(source, ExportFormat::Markdown),
            ExportFormat::Markdown,
        ))
    }

    pub fn render_pdf<S: DocumentSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<ExportedDocument, PipelineError> {
        let doc = self.document(source)?;
        let pages = self.engine.render_document(&doc);

        let mut info = DocumentInfo::titled(doc.title.clone());
        if let Some(author) = doc.metadata.iter().find(|f| f.label == "Author") {
            info = info.with_author(author.value.clone());
        }
        let bytes = render_pages(&self.engine, &pages, &info)?;
        Ok(ExportedDocument::new(
            bytes,
            self.filename(source, ExportFormat::Pdf),
            ExportFormat::Pdf,
        ))
    }

    pub fn render<S: DocumentSource + ?Sized>(
        &self,
        source: &S,
        format: ExportFormat,
    ) -> Result<ExportedDocument, PipelineError> {
        match format {
            ExportFormat::Markdown => self.render_markdown(source),
            ExportFormat::Pdf => self.render_pdf(source),
        }
    }

    /// Renders `source` and hands the artifact to `sink`.
    pub fn export<S: DocumentSource + ?Sized>(
        &self,
        source: &S,
        format: ExportFormat,
        sink: &dyn ExportSink,
    ) -> Result<ExportedDocument, PipelineError> {
        let artifact = self.render(source, format)?;
        self.deliver(&artifact, sink)?;
        Ok(artifact)
    }

    /// Renders several sources into one Markdown file under a shared heading.
    pub fn export_markdown_collection<S: DocumentSource>(
        &self,
        title: &str,
        sources: &[S],
        sink: &dyn ExportSink,
    ) -> Result<ExportedDocument, PipelineError> {
        if title.trim().is_empty() {
            return Err(PipelineError::MissingTitle);
        }
        let docs = sources
            .iter()
            .map(|source| self.document(source))
            .collect::<Result<Vec<_>, _>>()?;

        let filename = format!(
            "{}.{}",
            self.config.slug_style.apply(title),
            ExportFormat::Markdown.extension()
        );
        let artifact = ExportedDocument::new(
            render_markdown_collection(title, &docs).into_bytes(),
            filename,
            ExportFormat::Markdown,
        );
        self.deliver(&artifact, sink)?;
        Ok(artifact)
    }

    /// Writes the Markdown for `source` to `clipboard`.
    ///
    /// A failed write is reported once and not retried.
    pub fn copy_markdown<S: DocumentSource + ?Sized>(
        &self,
        source: &S,
        clipboard: &dyn Clipboard,
    ) -> Result<(), PipelineError> {
        let doc = self.document(source)?;
        let markdown = render_markdown(&doc);
        match clipboard.write_text(&markdown) {
            Ok(()) => {
                info!("Copied '{}' to the clipboard ({})", doc.title, clipboard.name());
                Ok(())
            }
            Err(e) => {
                warn!("Copying '{}' to the clipboard failed: {}", doc.title, e);
                Err(e.into())
            }
        }
    }

    /// The clipboard configured for this pipeline.
    pub fn system_clipboard(&self) -> CommandClipboard {
        self.config
            .clipboard_command
            .as_deref()
            .and_then(CommandClipboard::from_command_line)
            .unwrap_or_else(CommandClipboard::platform_default)
    }

    fn filename<S: DocumentSource + ?Sized>(&self, source: &S, format: ExportFormat) -> String {
        export_filename(source.file_stem(), source.kind(), format, self.config.slug_style)
    }

    fn deliver(&self, artifact: &ExportedDocument, sink: &dyn ExportSink) -> Result<(), PipelineError> {
        sink.write(&artifact.filename, &artifact.content_type, &artifact.content)?;
        info!(
            "Exported {} ({}, {} bytes) via {}",
            artifact.filename,
            artifact.format,
            artifact.size(),
            sink.name()
        );
        Ok(())
    }
}
