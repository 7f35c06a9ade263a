//! Export pipeline orchestration.
//!
//! - [`PipelineBuilder`]: fluent builder over [`ExportConfig`]
//! - [`ExportPipeline`]: validates a source, renders it and hands the
//!   artifact to a sink or clipboard
//!
//! # Example
//!
//! ```ignore
//! use micropm::{ExportFormat, PipelineBuilder, PrdState};
//! use micropm_traits::MemorySink;
//!
//! let pipeline = PipelineBuilder::new().build()?;
//! let sink = MemorySink::new();
//! pipeline.export(&PrdState::new("Checkout"), ExportFormat::Pdf, &sink)?;
//! ```

mod builder;
pub mod config;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::ExportConfig;
pub use orchestrator::ExportPipeline;
