use micropm_style::{BuiltinFont, PT_PER_MM};

/// Convert layout millimetres to PDF points
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Resource name a page uses to select `font`
pub fn font_resource_name(font: BuiltinFont) -> &'static str {
    match font {
        BuiltinFont::Helvetica => "F1",
        BuiltinFont::HelveticaBold => "F2",
    }
}
