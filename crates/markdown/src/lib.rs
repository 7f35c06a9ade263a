//! Markdown serialization of export documents.
//!
//! Output is byte-for-byte deterministic for a given [`Document`]. User text is
//! written as-is: `#`, `*` and `_` inside titles or bodies are not escaped.

mod collection;
mod renderer;

pub use collection::render_markdown_collection;
pub use renderer::{MarkdownView, render_markdown};

pub use micropm_types::Document;
