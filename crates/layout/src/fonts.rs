//! Text measurement for the PDF base-14 Helvetica faces.
//!
//! The exporter never embeds fonts, so measurement uses the published AFM
//! advance widths (thousandths of an em) for printable ASCII. Characters
//! outside that range are measured with [`FALLBACK_ADVANCE`].

use micropm_style::{BuiltinFont, MM_PER_PT, TextStyle};

/// Advance used for characters without an entry in the width tables.
pub const FALLBACK_ADVANCE: u16 = 556;

const FIRST_CHAR: u32 = 32;

/// Helvetica advance widths for U+0020..=U+007E.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // 0..9
    278, 278, 584, 584, 584, 556, 1015,                                             // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // N..Z
    278, 278, 278, 469, 556, 333,                                                   // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // n..z
    334, 260, 334, 584,                                                             // {..~
];

/// Helvetica-Bold advance widths for U+0020..=U+007E.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Measures text set in the builtin faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontLibrary;

impl FontLibrary {
    pub fn new() -> Self {
        Self
    }

    /// Fonts a renderer must declare for pages produced by this library.
    pub fn registered_fonts(&self) -> &'static [BuiltinFont] {
        &BuiltinFont::ALL
    }

    /// Advance width of `c` in thousandths of an em.
    pub fn advance(&self, font: BuiltinFont, c: char) -> u16 {
        let table = match font {
            BuiltinFont::Helvetica => &HELVETICA_WIDTHS,
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        (c as u32)
            .checked_sub(FIRST_CHAR)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or(FALLBACK_ADVANCE)
    }

    /// Width of `text` in millimetres when set in `style`.
    pub fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        let font = style.font();
        let units: u32 = text.chars().map(|c| self.advance(font, c) as u32).sum();
        units as f32 / 1000.0 * style.font_size * MM_PER_PT
    }
}
