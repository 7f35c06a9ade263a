use micropm_types::{Document, Field, Record};
use std::fmt::{self, Display, Formatter};

/// Renders `doc` to Markdown.
pub fn render_markdown(doc: &Document) -> String {
    MarkdownView::new(doc).to_string()
}

/// A [`Display`] adapter writing a document as Markdown.
///
/// `depth` shifts every heading down that many levels, so a document can be
/// nested under an outer heading.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownView<'a> {
    doc: &'a Document,
    depth: usize,
}

impl<'a> MarkdownView<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self { doc, depth: 0 }
    }

    pub fn nested(doc: &'a Document, depth: usize) -> Self {
        Self { doc, depth }
    }

    fn heading(&self, f: &mut Formatter<'_>, level: usize, text: &str) -> fmt::Result {
        write!(f, "{} {}\n\n", "#".repeat(level + self.depth), text)
    }

    fn record(&self, f: &mut Formatter<'_>, record: &Record) -> fmt::Result {
        self.heading(f, 3, &record.heading)?;
        if !record.attributes.is_empty() {
            write_fields(f, &record.attributes)?;
            writeln!(f)?;
        }
        if let Some(body) = self.doc.collection.body_text(record) {
            write!(f, "{body}\n\n")?;
        }
        Ok(())
    }
}

impl Display for MarkdownView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let doc = self.doc;
        self.heading(f, 1, &doc.title)?;

        if !doc.metadata.is_empty() {
            write_fields(f, &doc.metadata)?;
            writeln!(f)?;
        }

        for section in &doc.sections {
            self.heading(f, 2, &section.heading)?;
            write!(f, "{}\n\n", section.body_or_placeholder())?;
        }

        if doc.has_record_list() {
            self.heading(f, 2, &doc.collection.name)?;
            if doc.records.is_empty() {
                write!(f, "{}\n\n", doc.collection.empty_notice)?;
            }
            for record in &doc.records {
                self.record(f, record)?;
            }
        }
        Ok(())
    }
}

fn write_fields(f: &mut Formatter<'_>, fields: &[Field]) -> fmt::Result {
    for field in fields {
        writeln!(f, "**{}:** {}", field.label, field.value)?;
    }
    Ok(())
}
