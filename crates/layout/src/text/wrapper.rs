use crate::fonts::FontLibrary;
use log::warn;
use micropm_style::TextStyle;

/// Splits `text` into lines no wider than `max_width` millimetres.
///
/// Hard line breaks (`\n`, `\r\n`) always start a new line. Within a
/// paragraph lines are filled greedily, breaking only at spaces. A single word
/// wider than `max_width` is never split: it becomes its own oversized line.
/// Empty input yields one empty line, so every call produces at least one line.
pub fn wrap_text(text: &str, max_width: f32, style: &TextStyle, fonts: &FontLibrary) -> Vec<String> {
    let space_width = fonts.measure(" ", style);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        let mut words = paragraph.split(' ');

        // `split` always yields at least one item.
        let first = words.next().unwrap_or_default();
        let mut current = first.to_string();
        let mut current_width = fonts.measure(first, style);

        for word in words {
            let word_width = fonts.measure(word, style);
            if current_width + space_width + word_width > max_width {
                push_line(&mut lines, std::mem::take(&mut current), current_width, max_width);
                current.push_str(word);
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
            }
        }
        push_line(&mut lines, current, current_width, max_width);
    }

    lines
}

fn push_line(lines: &mut Vec<String>, line: String, width: f32, max_width: f32) {
    if width > max_width {
        warn!(
            "Unbreakable line of {:.1}mm exceeds the wrap width of {:.1}mm and will overflow",
            width, max_width
        );
    }
    lines.push(line);
}
