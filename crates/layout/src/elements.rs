use micropm_style::TextStyle;

/// What part of the document a block came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Title,
    Metadata,
    SectionHeading,
    SectionBody,
    RecordListHeading,
    RecordHeading,
    RecordAttribute,
    RecordBody,
}

impl BlockKind {
    /// Wrapped blocks are measured before placement and never cross the usable height
    /// unless they are taller than a whole page.
    pub fn is_wrapped(&self) -> bool {
        matches!(self, BlockKind::SectionBody | BlockKind::RecordBody)
    }
}

/// A block of text lines drawn one `line_pitch` apart.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub lines: Vec<String>,
    pub style: TextStyle,
    pub line_pitch: f32,
}

impl TextElement {
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

/// A text block with its position on the page. `y` is the first line's baseline,
/// measured from the top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: BlockKind,
    pub element: TextElement,
}

impl PositionedElement {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

impl std::fmt::Display for PositionedElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}@({:.1}, {:.1}) \"{}\"",
            self.kind,
            self.x,
            self.y,
            self.element.content()
        )
    }
}
