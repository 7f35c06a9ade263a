use crate::LayoutError;
use crate::algorithms::pagination::{check_block_fit, passes_threshold};
use crate::config::LayoutConfig;
use crate::elements::{BlockKind, PositionedElement, TextElement};
use crate::fonts::FontLibrary;
use crate::page::{Page, PageCursor};
use crate::text::wrap_text;
use log::debug;
use micropm_style::{BuiltinFont, ExportStylesheet, TextStyle};
use micropm_types::{Document, Field, Record};

/// Lays documents out onto fixed-size pages.
///
/// The engine holds only configuration; all cursor state lives in a single
/// [`render_document`](LayoutEngine::render_document) call.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    stylesheet: ExportStylesheet,
    fonts: FontLibrary,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            stylesheet: ExportStylesheet::default(),
            fonts: FontLibrary::new(),
        }
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, stylesheet: ExportStylesheet) -> Result<Self, LayoutError> {
        config.validate()?;
        let (_, page_height) = stylesheet.page_size.dimensions_mm();
        if config.usable_height > page_height {
            return Err(LayoutError::InvalidConfig(format!(
                "usable height {} exceeds the page height {}",
                config.usable_height, page_height
            )));
        }
        Ok(Self {
            config,
            stylesheet,
            fonts: FontLibrary::new(),
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn stylesheet(&self) -> &ExportStylesheet {
        &self.stylesheet
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    pub fn registered_fonts(&self) -> &'static [BuiltinFont] {
        self.fonts.registered_fonts()
    }

    /// Lays `doc` out page by page.
    ///
    /// Never fails: text that cannot be wrapped within the page is placed as an
    /// oversized line and allowed to overflow.
    pub fn render_document(&self, doc: &Document) -> Vec<Page> {
        let cfg = &self.config;
        let styles = &self.stylesheet;
        let (width, height) = styles.page_size.dimensions_mm();
        let mut cursor = PageCursor::new(cfg.top_margin, width, height);

        self.place_line(&mut cursor, &doc.title, styles.title, BlockKind::Title);
        cursor.advance(cfg.title_advance);

        for field in &doc.metadata {
            self.place_line(&mut cursor, &field_line(field), styles.metadata, BlockKind::Metadata);
            cursor.advance(cfg.metadata_line_advance);
        }
        if !doc.metadata.is_empty() {
            cursor.advance(cfg.metadata_block_gap);
        }

        for section in &doc.sections {
            self.place_line(
                &mut cursor,
                &section.heading,
                styles.section_heading,
                BlockKind::SectionHeading,
            );
            cursor.advance(cfg.section_heading_advance);

            let block = self.place_wrapped(
                &mut cursor,
                section.body_or_placeholder(),
                styles.body,
                BlockKind::SectionBody,
            );
            cursor.advance(block + cfg.section_body_gap);
        }

        // An empty record list is only announced in Markdown; the PDF omits it.
        if !doc.records.is_empty() {
            if passes_threshold(cursor.y(), cfg.record_list_threshold) {
                cursor.new_page();
            }
            self.place_line(
                &mut cursor,
                &doc.collection.name,
                styles.record_list_heading,
                BlockKind::RecordListHeading,
            );
            cursor.advance(cfg.record_list_heading_advance);

            for record in &doc.records {
                self.place_record(&mut cursor, doc, record);
            }
        }

        let pages = cursor.finish();
        debug!("Laid out '{}' on {} page(s)", doc.title, pages.len());
        pages
    }

    fn place_record(&self, cursor: &mut PageCursor, doc: &Document, record: &Record) {
        let cfg = &self.config;
        let styles = &self.stylesheet;

        if passes_threshold(cursor.y(), cfg.record_threshold) {
            cursor.new_page();
        }
        self.place_line(cursor, &record.heading, styles.record_heading, BlockKind::RecordHeading);
        cursor.advance(cfg.record_heading_advance);

        for attribute in &record.attributes {
            self.place_line(
                cursor,
                &field_line(attribute),
                styles.attribute,
                BlockKind::RecordAttribute,
            );
            cursor.advance(cfg.record_attribute_advance);
        }

        let block = match doc.collection.body_text(record) {
            Some(body) => self.place_wrapped(cursor, body, styles.body, BlockKind::RecordBody),
            None => 0.0,
        };
        cursor.advance(block + cfg.record_body_gap);
    }

    /// Places a single unwrapped line at the cursor without advancing it.
    fn place_line(&self, cursor: &mut PageCursor, text: &str, style: TextStyle, kind: BlockKind) {
        let element = PositionedElement {
            x: self.config.left_margin,
            y: cursor.y(),
            width: self.fonts.measure(text, &style),
            height: self.config.block_height(1),
            kind,
            element: TextElement {
                lines: vec![text.to_string()],
                style,
                line_pitch: self.config.line_pitch,
            },
        };
        cursor.place(element);
    }

    /// Wraps `text`, breaks the page first if the block would cross the usable
    /// height, places it, and returns its height. The cursor is not advanced.
    fn place_wrapped(
        &self,
        cursor: &mut PageCursor,
        text: &str,
        style: TextStyle,
        kind: BlockKind,
    ) -> f32 {
        let lines = wrap_text(text, self.config.wrap_width, &style, &self.fonts);
        let height = self.config.block_height(lines.len());

        if check_block_fit(cursor.y(), height, self.config.usable_height).should_break {
            cursor.new_page();
        }

        let width = lines
            .iter()
            .map(|line| self.fonts.measure(line, &style))
            .fold(0.0f32, f32::max);
        cursor.place(PositionedElement {
            x: self.config.left_margin,
            y: cursor.y(),
            width,
            height,
            kind,
            element: TextElement {
                lines,
                style,
                line_pitch: self.config.line_pitch,
            },
        });
        height
    }
}

fn field_line(field: &Field) -> String {
    format!("{}: {}", field.label, field.value)
}
