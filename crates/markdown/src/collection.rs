use crate::renderer::MarkdownView;
use log::debug;
use micropm_types::Document;
use std::fmt::Write;

const SEPARATOR: &str = "\n---\n\n";

/// Renders several documents under one `# {title}` heading.
///
/// Each document is nested one heading level deeper and consecutive documents
/// are separated by a horizontal rule.
pub fn render_markdown_collection(title: &str, docs: &[Document]) -> String {
    let mut out = format!("# {title}\n\n");
    for (index, doc) in docs.iter().enumerate() {
        if index > 0 {
            out.push_str(SEPARATOR);
        }
        let rendered = MarkdownView::nested(doc, 1).to_string();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", rendered.trim_end_matches('\n'));
    }
    debug!("Rendered a collection of {} document(s) under '{}'", docs.len(), title);
    out
}
