use super::{DocumentSource, ToolKind};
use micropm_types::{Document, Record, RecordCollection};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One chapter of the PRD template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSection {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The PRD template, in document order.
pub const PRD_TEMPLATE_SECTIONS: [TemplateSection; 10] = [
    TemplateSection {
        id: "overview",
        title: "Overview",
        description: "A brief summary of what the product/feature is and why it matters.",
    },
    TemplateSection {
        id: "background",
        title: "Background & Strategic Fit",
        description: "The context behind this initiative and how it aligns with company goals.",
    },
    TemplateSection {
        id: "goals",
        title: "Goals & Success Metrics",
        description: "What this product/feature aims to achieve and how success will be measured.",
    },
    TemplateSection {
        id: "user-problems",
        title: "User Problems & Use Cases",
        description: "The specific user needs this addresses and how users will interact with it.",
    },
    TemplateSection {
        id: "requirements",
        title: "Functional Requirements",
        description: "The detailed specifications of what the product/feature must do.",
    },
    TemplateSection {
        id: "design",
        title: "Design & User Experience",
        description: "The visual and interaction design specifications.",
    },
    TemplateSection {
        id: "technical",
        title: "Technical Considerations",
        description: "Technical architecture, dependencies, and constraints.",
    },
    TemplateSection {
        id: "timeline",
        title: "Timeline & Milestones",
        description: "The proposed schedule for development and release.",
    },
    TemplateSection {
        id: "risks",
        title: "Risks & Mitigations",
        description: "Potential issues and how they'll be addressed.",
    },
    TemplateSection {
        id: "open-questions",
        title: "Open Questions",
        description: "Unresolved issues that need further research or discussion.",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureStatus {
    #[serde(rename = "Must Have")]
    MustHave,
    #[default]
    #[serde(rename = "Should Have")]
    ShouldHave,
    #[serde(rename = "Nice to Have")]
    NiceToHave,
}

impl fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureStatus::MustHave => write!(f, "Must Have"),
            FeatureStatus::ShouldHave => write!(f, "Should Have"),
            FeatureStatus::NiceToHave => write!(f, "Nice to Have"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: FeatureStatus,
}

impl Feature {
    pub fn new(title: impl Into<String>, priority: Priority, status: FeatureStatus) -> Self {
        Self {
            title: title.into(),
            priority,
            status,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// State of the PRD editor. Section text is keyed by template section id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrdState {
    pub title: String,
    pub author: String,
    pub date: String,
    pub version: String,
    pub sections: HashMap<String, String>,
    pub features: Vec<Feature>,
}

impl PrdState {
    /// A fresh PRD dated today at version 1.0.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            version: "1.0".to_string(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_section(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.sections.insert(id.into(), text.into());
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }
}

impl DocumentSource for PrdState {
    fn to_document(&self) -> Document {
        let mut doc = Document::new(self.title.clone())
            .with_field("Author", self.author.clone())
            .with_field("Date", self.date.clone())
            .with_field("Version", self.version.clone())
            .with_collection(RecordCollection::default());

        for section in &PRD_TEMPLATE_SECTIONS {
            let body = self.sections.get(section.id).cloned().unwrap_or_default();
            doc = doc.with_section(section.title, body);
        }

        for feature in &self.features {
            doc = doc.with_record(
                Record::new(feature.title.clone())
                    .with_attribute("Priority", feature.priority.to_string())
                    .with_attribute("Status", feature.status.to_string())
                    .with_body(feature.description.clone()),
            );
        }
        doc
    }

    fn file_stem(&self) -> &str {
        &self.title
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Prd
    }
}
