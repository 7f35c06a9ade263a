//! The exportable document model.
//!
//! Every tool reduces its state to a [`Document`] before export. The model is a
//! plain value: it is built fresh for each export call and never mutated once
//! handed to a renderer.

use serde::{Deserialize, Serialize};

/// Written in place of an empty section body.
pub const EMPTY_SECTION_PLACEHOLDER: &str = "No content provided.";

/// A single `label: value` pair, used for document metadata and record attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A heading and free-form body. An empty body renders as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

impl Section {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }

    pub fn body_or_placeholder(&self) -> &str {
        if self.body.is_empty() {
            EMPTY_SECTION_PLACEHOLDER
        } else {
            &self.body
        }
    }
}

/// A structured list item (a PRD feature, a roadmap item, a survey question).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub heading: String,
    #[serde(default)]
    pub attributes: Vec<Field>,
    #[serde(default)]
    pub body: String,
}

impl Record {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Field::new(label, value));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Labels for the record list of a document.
///
/// Defaults reproduce the PRD feature list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordCollection {
    /// Heading written above the record list.
    pub name: String,
    /// Line written instead of the list when there are no records.
    pub empty_notice: String,
    /// Text written for a record with an empty body. When this is empty the
    /// body paragraph is omitted altogether.
    pub body_placeholder: String,
    /// Skip the whole list block (heading included) when there are no records.
    pub omit_when_empty: bool,
}

impl Default for RecordCollection {
    fn default() -> Self {
        Self {
            name: "Feature List".to_string(),
            empty_notice: "No features defined.".to_string(),
            body_placeholder: "No description provided.".to_string(),
            omit_when_empty: false,
        }
    }
}

impl RecordCollection {
    pub fn named(name: impl Into<String>, empty_notice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            empty_notice: empty_notice.into(),
            ..Default::default()
        }
    }

    /// A collection that never renders when empty.
    pub fn hidden() -> Self {
        Self {
            omit_when_empty: true,
            ..Default::default()
        }
    }

    pub fn with_body_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.body_placeholder = placeholder.into();
        self
    }

    /// The text written as a record's body, or `None` when nothing is written.
    pub fn body_text<'a>(&'a self, record: &'a Record) -> Option<&'a str> {
        if !record.body.is_empty() {
            Some(&record.body)
        } else if !self.body_placeholder.is_empty() {
            Some(&self.body_placeholder)
        } else {
            None
        }
    }
}

/// The language-agnostic export unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub metadata: Vec<Field>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub collection: RecordCollection,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push(Field::new(label, value));
        self
    }

    pub fn with_section(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.sections.push(Section::new(heading, body));
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_collection(mut self, collection: RecordCollection) -> Self {
        self.collection = collection;
        self
    }

    /// Whether the record list block is written at all.
    pub fn has_record_list(&self) -> bool {
        !(self.records.is_empty() && self.collection.omit_when_empty)
    }

    /// The title is the only precondition the export pipeline checks.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
