//! Adapters from tool state to the export [`Document`].
//!
//! Each tool owns its state; an adapter reads it and produces a fresh
//! document for every export. Source ordering is kept verbatim and absent
//! optional values become empty strings.

mod persona;
mod prd;
mod roadmap;
mod survey;

pub use persona::PersonaState;
pub use prd::{Feature, FeatureStatus, PRD_TEMPLATE_SECTIONS, Priority, PrdState, TemplateSection};
pub use roadmap::{RoadmapItem, RoadmapPriority, RoadmapState, RoadmapStatus};
pub use survey::{Question, QuestionType, SurveyTemplate, TemplateType};

use itertools::Itertools;
use micropm_types::Document;

/// Which tool produced a document. Selects the export filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Prd,
    Persona,
    Roadmap,
    Survey,
}

impl ToolKind {
    pub fn filename_suffix(&self) -> Option<&'static str> {
        match self {
            ToolKind::Prd => Some("prd"),
            ToolKind::Persona => Some("persona"),
            ToolKind::Roadmap | ToolKind::Survey => None,
        }
    }
}

/// Anything that can be exported.
pub trait DocumentSource {
    fn to_document(&self) -> Document;

    /// The text the export filename is derived from.
    fn file_stem(&self) -> &str;

    fn kind(&self) -> ToolKind;
}

/// `- item` lines, one per entry.
pub(crate) fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().map(|item| format!("- {}", item.as_ref())).join("\n")
}
