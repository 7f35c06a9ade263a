use micropm::{
    Document, DocumentSource, Feature, FeatureStatus, PersonaState, PrdState, Priority, Question,
    QuestionType, RoadmapItem, RoadmapPriority, RoadmapState, RoadmapStatus, SurveyTemplate,
    TemplateType, ToolKind,
};

/// A hand-built document exported without a filename suffix.
pub struct RawDocument(pub Document);

impl DocumentSource for RawDocument {
    fn to_document(&self) -> Document {
        self.0.clone()
    }

    fn file_stem(&self) -> &str {
        &self.0.title
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Survey
    }
}

/// `count` short hard-broken lines
pub fn numbered_lines(count: usize) -> String {
    (1..=count)
        .map(|i| format!("Line {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn checkout_prd() -> PrdState {
    PrdState {
        title: "Checkout Revamp".into(),
        author: "Dana Lee".into(),
        date: "2024-05-01".into(),
        version: "1.0".into(),
        ..Default::default()
    }
    .with_section("overview", "Make checkout a single page.")
    .with_section("goals", "Raise conversion by 5%.")
    .with_feature(
        Feature::new("Guest checkout", Priority::High, FeatureStatus::MustHave)
            .with_description("Buy without creating an account."),
    )
    .with_feature(Feature::new(
        "Saved carts",
        Priority::Low,
        FeatureStatus::NiceToHave,
    ))
}

pub fn persona(name: &str) -> PersonaState {
    PersonaState {
        name: name.into(),
        age: "28".into(),
        occupation: "Product Designer".into(),
        income: "$85,000".into(),
        location: "San Francisco, CA".into(),
        education: "BFA".into(),
        bio: "Designs mobile apps for a fintech startup.".into(),
        goals: vec!["Ship faster".into(), "Reduce handoff friction".into()],
        frustrations: vec!["Slow feedback".into()],
        motivations: vec!["Craft".into()],
        brands: vec!["Figma".into(), "Notion".into()],
        ..Default::default()
    }
}

pub fn sample_roadmap() -> RoadmapState {
    let mut auth = RoadmapItem::new(
        "User Authentication",
        RoadmapStatus::Completed,
        RoadmapPriority::High,
    );
    auth.description = "Implement OAuth login with social providers".into();
    auth.quarter = "Q1".into();
    auth.assignee = "Alex Chen".into();

    let mut dashboard = RoadmapItem::new(
        "Dashboard Redesign",
        RoadmapStatus::InProgress,
        RoadmapPriority::Medium,
    );
    dashboard.description = "Revamp the main dashboard".into();

    RoadmapState::default().with_item(auth).with_item(dashboard)
}

pub fn onboarding_interview() -> SurveyTemplate {
    let mut template = SurveyTemplate::new("Onboarding Interview", TemplateType::Interview)
        .with_question(Question::new("What is your role?", QuestionType::Text).required())
        .with_question(
            Question::new("How did you hear about us?", QuestionType::MultipleChoice)
                .with_options(["Search", "Friend", "Ad"]),
        );
    template.description = "Script for first-week customer calls.".into();
    template.target = "New customers".into();
    template.created_at = "2024-03-01".into();
    template
}
