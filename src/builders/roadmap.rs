use super::{DocumentSource, ToolKind};
use micropm_types::{Document, Record, RecordCollection};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ROADMAP_TITLE: &str = "Product Roadmap";

/// Board columns, left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStatus {
    #[default]
    Backlog,
    Planned,
    InProgress,
    Completed,
}

impl RoadmapStatus {
    pub const COLUMNS: [RoadmapStatus; 4] = [
        RoadmapStatus::Backlog,
        RoadmapStatus::Planned,
        RoadmapStatus::InProgress,
        RoadmapStatus::Completed,
    ];
}

impl fmt::Display for RoadmapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadmapStatus::Backlog => write!(f, "Backlog"),
            RoadmapStatus::Planned => write!(f, "Planned"),
            RoadmapStatus::InProgress => write!(f, "In Progress"),
            RoadmapStatus::Completed => write!(f, "Completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for RoadmapPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadmapPriority::High => write!(f, "High"),
            RoadmapPriority::Medium => write!(f, "Medium"),
            RoadmapPriority::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: RoadmapStatus,
    pub priority: RoadmapPriority,
    /// `Q1`..`Q4`, or empty when unscheduled.
    pub quarter: String,
    pub assignee: String,
}

impl RoadmapItem {
    pub fn new(title: impl Into<String>, status: RoadmapStatus, priority: RoadmapPriority) -> Self {
        Self {
            title: title.into(),
            status,
            priority,
            ..Default::default()
        }
    }

    fn to_record(&self) -> Record {
        Record::new(self.title.clone())
            .with_attribute("Status", self.status.to_string())
            .with_attribute("Priority", self.priority.to_string())
            .with_attribute("Quarter", or_default(&self.quarter, "Not scheduled"))
            .with_attribute("Assignee", or_default(&self.assignee, "Unassigned"))
            .with_body(self.description.clone())
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// The whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoadmapState {
    pub items: Vec<RoadmapItem>,
}

impl RoadmapState {
    pub fn with_item(mut self, item: RoadmapItem) -> Self {
        self.items.push(item);
        self
    }
}

impl DocumentSource for RoadmapState {
    /// Items are grouped by column; order within a column is board order.
    fn to_document(&self) -> Document {
        let mut doc = Document::new(ROADMAP_TITLE).with_collection(
            RecordCollection::named("Roadmap Items", "No roadmap items defined.")
                .with_body_placeholder(""),
        );
        for column in RoadmapStatus::COLUMNS {
            for item in self.items.iter().filter(|item| item.status == column) {
                doc = doc.with_record(item.to_record());
            }
        }
        doc
    }

    fn file_stem(&self) -> &str {
        ROADMAP_TITLE
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Roadmap
    }
}
