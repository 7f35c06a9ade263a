use super::{DocumentSource, ToolKind, bullet_list};
use micropm_types::{Document, RecordCollection};
use serde::{Deserialize, Serialize};

/// A user persona. List fields render as `- item` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonaState {
    pub id: String,
    pub name: String,
    pub age: String,
    pub occupation: String,
    pub income: String,
    pub location: String,
    pub education: String,
    pub bio: String,
    pub goals: Vec<String>,
    pub frustrations: Vec<String>,
    pub motivations: Vec<String>,
    pub brands: Vec<String>,
}

impl PersonaState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl DocumentSource for PersonaState {
    fn to_document(&self) -> Document {
        Document::new(format!("{} - User Persona", self.name))
            .with_field("Age", self.age.clone())
            .with_field("Occupation", self.occupation.clone())
            .with_field("Income", self.income.clone())
            .with_field("Location", self.location.clone())
            .with_field("Education", self.education.clone())
            .with_section("Biography", self.bio.clone())
            .with_section("Goals", bullet_list(&self.goals))
            .with_section("Frustrations", bullet_list(&self.frustrations))
            .with_section("Motivations", bullet_list(&self.motivations))
            .with_section("Preferred Brands", bullet_list(&self.brands))
            .with_collection(RecordCollection::hidden())
    }

    fn file_stem(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Persona
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex() -> PersonaState {
        PersonaState {
            name: "Alex Chen".into(),
            age: "28".into(),
            occupation: "Product Designer".into(),
            bio: "Designs mobile apps.".into(),
            goals: vec!["Ship faster".into(), "Learn Rust".into()],
            ..Default::default()
        }
    }

    #[test]
    fn persona_document_shape() {
        let doc = alex().to_document();
        assert_eq!(doc.title, "Alex Chen - User Persona");

        let labels: Vec<_> = doc.metadata.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["Age", "Occupation", "Income", "Location", "Education"]);

        let headings: Vec<_> = doc.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            ["Biography", "Goals", "Frustrations", "Motivations", "Preferred Brands"]
        );
        assert_eq!(doc.sections[1].body, "- Ship faster\n- Learn Rust");
        assert!(!doc.has_record_list());
    }

    #[test]
    fn persona_ignores_unknown_front_end_fields() {
        let json = r#"{ "id": "p1", "name": "Sam", "photo": "https://example.com/sam.png", "goals": ["Save time"] }"#;
        let persona: PersonaState = serde_json::from_str(json).unwrap();
        assert_eq!(persona.file_stem(), "Sam");
        assert_eq!(persona.goals, ["Save time"]);
        assert_eq!(persona.age, "");
    }
}
