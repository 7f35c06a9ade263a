//! PDF encoder for laid-out pages using lopdf.
//!
//! Text is set in the unembedded base-14 Helvetica faces with WinAnsi encoding,
//! one text object per line, so the output stays small and text-extractable.

mod helpers;
mod renderer;
mod writer;

pub use helpers::{encode_win_ansi, render_page_to_content};
pub use renderer::{LopdfRenderer, render_pages};
pub use writer::PdfWriter;
