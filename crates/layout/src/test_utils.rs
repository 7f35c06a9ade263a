use crate::{BlockKind, LayoutEngine, Page, PositionedElement};
use micropm_types::Document;

/// Creates a default layout engine for testing purposes.
pub fn create_test_engine() -> LayoutEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    LayoutEngine::default()
}

pub fn paginate(doc: &Document) -> Vec<Page> {
    create_test_engine().render_document(doc)
}

/// A body of `count` hard-broken lines, one wrapped line each.
pub fn numbered_lines(count: usize) -> String {
    (1..=count)
        .map(|i| format!("Line {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Finds the first element whose text starts with `content`, with its page index.
pub fn find_element<'a>(pages: &'a [Page], content: &str) -> Option<(usize, &'a PositionedElement)> {
    pages.iter().enumerate().find_map(|(index, page)| {
        page.elements
            .iter()
            .find(|el| el.element.lines.first().is_some_and(|l| l.starts_with(content)))
            .map(|el| (index, el))
    })
}

pub fn elements_of_kind(pages: &[Page], kind: BlockKind) -> Vec<(usize, &PositionedElement)> {
    pages
        .iter()
        .enumerate()
        .flat_map(|(index, page)| {
            page.elements
                .iter()
                .filter(move |el| el.kind == kind)
                .map(move |el| (index, el))
        })
        .collect()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}
