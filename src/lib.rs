//! MicroPM document export.
//!
//! Tool state (PRD, persona, roadmap, survey template) is adapted into a
//! uniform [`Document`], rendered to Markdown or laid out and encoded as PDF,
//! then delivered to an [`ExportSink`](micropm_traits::ExportSink) or a
//! [`Clipboard`](micropm_traits::Clipboard).
//!
//! ```ignore
//! use micropm::{ExportFormat, PipelineBuilder, RoadmapState};
//! use micropm_traits::MemorySink;
//!
//! let pipeline = PipelineBuilder::new().build()?;
//! let sink = MemorySink::new();
//! pipeline.export(&RoadmapState::default(), ExportFormat::Markdown, &sink)?;
//! ```

pub mod builders;
pub mod error;
pub mod export;
pub mod pipeline;

pub use builders::{
    DocumentSource, Feature, FeatureStatus, PersonaState, PrdState, Priority, Question,
    QuestionType, RoadmapItem, RoadmapPriority, RoadmapState, RoadmapStatus, SurveyTemplate,
    TemplateType, ToolKind,
};
pub use error::PipelineError;
pub use export::{CommandClipboard, DirectorySink, ExportFormat, ExportedDocument, SlugStyle};
pub use pipeline::{ExportConfig, ExportPipeline, PipelineBuilder};

pub use micropm_types::{Document, Field, Record, RecordCollection, Section};

/// Heading and file stem of the combined persona export.
pub const PERSONA_COLLECTION_TITLE: &str = "User Personas";
