use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use micropm_layout::Page;
use micropm_render_core::utils::{flip_y, font_resource_name, mm_to_pt};

/// Encodes `text` for a WinAnsi font. Latin-1 printable characters map to
/// their own byte; everything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Emits one text object per line of every block on `page`.
pub fn render_page_to_content(page: &Page) -> Content {
    let page_height = mm_to_pt(page.height);
    let mut operations = Vec::new();

    for el in &page.elements {
        let text = &el.element;
        let font = font_resource_name(text.style.font());
        let x = mm_to_pt(el.x);

        for (i, line) in text.lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = el.y + i as f32 * text.line_pitch;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![font.into(), text.style.font_size.into()],
            ));
            operations.push(Operation::new(
                "Td",
                vec![x.into(), flip_y(mm_to_pt(baseline), page_height).into()],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(line), StringFormat::Literal)],
            ));
            operations.push(Operation::new("ET", vec![]));
        }
    }

    Content { operations }
}
