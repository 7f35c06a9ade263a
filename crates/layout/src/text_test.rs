#![cfg(test)]

use crate::fonts::FontLibrary;
use crate::test_utils::{assert_close, find_element, paginate};
use crate::text::wrap_text;
use crate::BlockKind;
use micropm_style::TextStyle;
use micropm_types::Document;

fn body_style() -> TextStyle {
    TextStyle::regular(12.0)
}

#[test]
fn test_short_text_is_a_single_line() {
    let lines = wrap_text("Users sign in with email.", 180.0, &body_style(), &FontLibrary::new());
    assert_eq!(lines, vec!["Users sign in with email."]);
}

#[test]
fn test_empty_text_yields_one_empty_line() {
    let lines = wrap_text("", 180.0, &body_style(), &FontLibrary::new());
    assert_eq!(lines, vec![String::new()]);
}

#[test]
fn test_hard_breaks_are_preserved() {
    let lines = wrap_text("first\r\nsecond\n\nfourth", 180.0, &body_style(), &FontLibrary::new());
    assert_eq!(lines, vec!["first", "second", "", "fourth"]);
}

#[test]
fn test_long_paragraph_wraps_within_width() {
    let fonts = FontLibrary::new();
    let text = "The onboarding flow must let a new user create an account, verify their \
                email address and invite teammates without leaving the product tour.";
    let lines = wrap_text(text, 180.0, &body_style(), &fonts);

    assert!(lines.len() > 1, "expected wrapping, got {lines:?}");
    for line in &lines {
        assert!(fonts.measure(line, &body_style()) <= 180.0, "line too wide: {line}");
    }
    assert_eq!(lines.join(" "), text);
}

#[test]
fn test_words_are_never_split() {
    let fonts = FontLibrary::new();
    let word = "W".repeat(60);
    let text = format!("short {word} tail");
    let lines = wrap_text(&text, 50.0, &body_style(), &fonts);

    assert_eq!(lines, vec!["short".to_string(), word, "tail".to_string()]);
}

#[test]
fn test_narrow_width_puts_each_word_on_its_own_line() {
    let lines = wrap_text("alpha beta gamma", 1.0, &body_style(), &FontLibrary::new());
    assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_wrapped_body_height_follows_line_count() {
    let body = "word ".repeat(60);
    let doc = Document::new("Wrapping").with_section("Body", body.trim_end());
    let pages = paginate(&doc);

    let (_, element) = find_element(&pages, "word").expect("body block");
    assert_eq!(element.kind, BlockKind::SectionBody);
    assert!(element.element.lines.len() >= 2);
    assert_close(element.height, element.element.lines.len() as f32 * 7.0);
    assert!(element.width <= 180.0);
}
