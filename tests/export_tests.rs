mod common;

use common::fixtures::*;
use common::{RejectingClipboard, TestResult, test_pipeline};
use micropm::{
    DirectorySink, ExportFormat, PipelineBuilder, PipelineError, PrdState, RoadmapState,
    SlugStyle,
};
use micropm_traits::{ClipboardError, InMemoryClipboard, MemorySink};

#[test]
fn test_filenames_follow_tool_suffixes() -> TestResult {
    let pipeline = test_pipeline()?;
    let sink = MemorySink::new();

    pipeline.export(&checkout_prd(), ExportFormat::Markdown, &sink)?;
    pipeline.export(&checkout_prd(), ExportFormat::Pdf, &sink)?;
    pipeline.export(&persona("Alex Chen"), ExportFormat::Markdown, &sink)?;
    pipeline.export(&sample_roadmap(), ExportFormat::Pdf, &sink)?;
    pipeline.export(&onboarding_interview(), ExportFormat::Markdown, &sink)?;

    let names: Vec<_> = sink.files().into_iter().map(|f| f.filename).collect();
    assert_eq!(
        names,
        [
            "checkout-revamp-prd.md",
            "checkout-revamp-prd.pdf",
            "alex-chen-persona.md",
            "product-roadmap.pdf",
            "onboarding-interview.md",
        ]
    );
    Ok(())
}

#[test]
fn test_content_types_match_format() -> TestResult {
    let pipeline = test_pipeline()?;
    let sink = MemorySink::new();

    let markdown = pipeline.export(&sample_roadmap(), ExportFormat::Markdown, &sink)?;
    let pdf = pipeline.export(&sample_roadmap(), ExportFormat::Pdf, &sink)?;

    assert_eq!(markdown.content_type, "text/markdown");
    assert_eq!(pdf.content_type, "application/pdf");
    assert_eq!(
        sink.get("product-roadmap.pdf").map(|f| f.content_type),
        Some("application/pdf".to_string())
    );
    Ok(())
}

#[test]
fn test_untitled_document_is_rejected_without_delivery() -> TestResult {
    let pipeline = test_pipeline()?;
    let sink = MemorySink::new();
    let untitled = PrdState {
        title: "   ".into(),
        ..Default::default()
    };

    for format in [ExportFormat::Markdown, ExportFormat::Pdf] {
        let result = pipeline.export(&untitled, format, &sink);
        assert!(matches!(result, Err(PipelineError::MissingTitle)));
    }
    assert!(sink.is_empty());
    Ok(())
}

#[test]
fn test_directory_sink_writes_files() -> TestResult {
    let dir = tempfile::tempdir()?;
    let sink = DirectorySink::new(dir.path().join("exports"))?;
    let pipeline = test_pipeline()?;

    let artifact = pipeline.export(&checkout_prd(), ExportFormat::Pdf, &sink)?;

    let written = std::fs::read(sink.root().join("checkout-revamp-prd.pdf"))?;
    assert_eq!(written, artifact.content);
    assert!(written.starts_with(b"%PDF-"));
    Ok(())
}

#[test]
fn test_title_with_path_separators_exports_to_a_directory() -> TestResult {
    let dir = tempfile::tempdir()?;
    let sink = DirectorySink::new(dir.path())?;
    let pipeline = test_pipeline()?;

    let artifact = pipeline.export(&PrdState::new("Q3/Q4 Launch"), ExportFormat::Markdown, &sink)?;

    assert_eq!(artifact.filename, "q3-q4-launch-prd.md");
    let written = std::fs::read_to_string(dir.path().join("q3-q4-launch-prd.md"))?;
    assert!(written.starts_with("# Q3/Q4 Launch\n\n"));
    Ok(())
}

#[test]
fn test_sanitized_slugs() -> TestResult {
    let pipeline = PipelineBuilder::new()
        .with_slug_style(SlugStyle::Sanitized)
        .build()?;
    let sink = MemorySink::new();
    let prd = PrdState {
        title: "Café: Q3 Plans!".into(),
        ..Default::default()
    };

    let artifact = pipeline.export(&prd, ExportFormat::Markdown, &sink)?;
    assert_eq!(artifact.filename, "cafe-q3-plans-prd.md");
    Ok(())
}

#[test]
fn test_verbatim_slugs_keep_punctuation() -> TestResult {
    let pipeline = test_pipeline()?;
    let prd = PrdState {
        title: "Café:  Q3 Plans!".into(),
        ..Default::default()
    };
    let artifact = pipeline.render_markdown(&prd)?;
    assert_eq!(artifact.filename, "café:-q3-plans!-prd.md");
    Ok(())
}

#[test]
fn test_copy_markdown_to_clipboard() -> TestResult {
    let pipeline = test_pipeline()?;
    let clipboard = InMemoryClipboard::new();

    pipeline.copy_markdown(&RoadmapState::default(), &clipboard)?;
    assert_eq!(
        clipboard.contents().as_deref(),
        Some("# Product Roadmap\n\n## Roadmap Items\n\nNo roadmap items defined.\n\n")
    );
    Ok(())
}

#[test]
fn test_clipboard_failure_is_reported_once() -> TestResult {
    let pipeline = test_pipeline()?;
    let clipboard = RejectingClipboard::default();

    let result = pipeline.copy_markdown(&checkout_prd(), &clipboard);
    assert!(matches!(
        result,
        Err(PipelineError::Clipboard(ClipboardError::WriteFailed(_)))
    ));
    assert_eq!(clipboard.attempts(), 1);
    Ok(())
}

#[test]
fn test_untitled_document_never_reaches_the_clipboard() -> TestResult {
    let pipeline = test_pipeline()?;
    let clipboard = RejectingClipboard::default();

    let result = pipeline.copy_markdown(&PrdState::default(), &clipboard);
    assert!(matches!(result, Err(PipelineError::MissingTitle)));
    assert_eq!(clipboard.attempts(), 0);
    Ok(())
}

#[test]
fn test_format_parsing() -> TestResult {
    assert_eq!("md".parse::<ExportFormat>()?, ExportFormat::Markdown);
    assert_eq!("pdf".parse::<ExportFormat>()?, ExportFormat::Pdf);
    assert!(matches!(
        "docx".parse::<ExportFormat>(),
        Err(PipelineError::UnsupportedFormat(_))
    ));
    Ok(())
}

#[test]
fn test_pipeline_reads_config_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("micropm.json");
    std::fs::write(&path, r#"{ "slugStyle": "sanitized" }"#)?;

    let pipeline = PipelineBuilder::new().with_config_file(&path)?.build()?;
    assert_eq!(pipeline.config().slug_style, SlugStyle::Sanitized);
    Ok(())
}
