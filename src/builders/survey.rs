use super::{DocumentSource, ToolKind, bullet_list};
use micropm_types::{Document, Record, RecordCollection};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    #[default]
    Interview,
    Survey,
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateType::Interview => write!(f, "Interview Script"),
            TemplateType::Survey => write!(f, "Survey Template"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    Text,
    MultipleChoice,
    Checkbox,
    Rating,
    OpenEnded,
}

impl QuestionType {
    /// The wire name with underscores shown as spaces.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Text => "text",
            QuestionType::MultipleChoice => "multiple choice",
            QuestionType::Checkbox => "checkbox",
            QuestionType::Rating => "rating",
            QuestionType::OpenEnded => "open ended",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub required: bool,
}

impl Question {
    pub fn new(text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            text: text.into(),
            question_type,
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options<S: Into<String>>(mut self, options: impl IntoIterator<Item = S>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    fn to_record(&self, number: usize) -> Record {
        let marker = if self.required { " *" } else { "" };
        let mut record = Record::new(format!("{number}. {}{marker}", self.text))
            .with_attribute("Type", self.question_type.label());
        if !self.options.is_empty() {
            record = record.with_body(format!("Options:\n{}", bullet_list(&self.options)));
        }
        record
    }
}

/// An interview script or survey template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    /// Target audience.
    pub target: String,
    pub questions: Vec<Question>,
    pub created_at: String,
}

impl SurveyTemplate {
    pub fn new(title: impl Into<String>, template_type: TemplateType) -> Self {
        Self {
            title: title.into(),
            template_type,
            ..Default::default()
        }
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }
}

impl DocumentSource for SurveyTemplate {
    fn to_document(&self) -> Document {
        let mut doc = Document::new(self.title.clone())
            .with_field("Type", self.template_type.to_string())
            .with_field("Target Audience", self.target.clone())
            .with_field("Created", self.created_at.clone())
            .with_section("Description", self.description.clone())
            .with_collection(
                RecordCollection::named("Questions", "No questions defined.").with_body_placeholder(""),
            );
        for (index, question) in self.questions.iter().enumerate() {
            doc = doc.with_record(question.to_record(index + 1));
        }
        doc
    }

    fn file_stem(&self) -> &str {
        &self.title
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Survey
    }
}
