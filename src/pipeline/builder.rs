use super::config::ExportConfig;
use super::orchestrator::ExportPipeline;
use crate::error::PipelineError;
use crate::export::SlugStyle;
use micropm_layout::{LayoutConfig, LayoutEngine};
use micropm_style::ExportStylesheet;
use std::path::Path;

/// A builder for creating an `ExportPipeline`.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: ExportConfig,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = ExportConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_layout_config(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: ExportStylesheet) -> Self {
        self.config.stylesheet = stylesheet;
        self
    }

    /// Selects how file stems are turned into filenames.
    pub fn with_slug_style(mut self, style: SlugStyle) -> Self {
        self.config.slug_style = style;
        self
    }

    pub fn with_clipboard_command(mut self, command: Vec<String>) -> Self {
        self.config.clipboard_command = Some(command);
        self
    }

    /// Consumes the builder and creates the `ExportPipeline`.
    pub fn build(self) -> Result<ExportPipeline, PipelineError> {
        if matches!(&self.config.clipboard_command, Some(command) if command.is_empty()) {
            return Err(PipelineError::Config(
                "clipboardCommand must name a program".to_string(),
            ));
        }
        let engine = LayoutEngine::new(self.config.layout, self.config.stylesheet.clone())?;
        log::debug!("Built export pipeline with {:?} slugs", self.config.slug_style);
        Ok(ExportPipeline::new(engine, self.config))
    }
}
