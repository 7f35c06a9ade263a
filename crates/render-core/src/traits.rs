use crate::error::RenderError;
use crate::types::DocumentInfo;
use lopdf::ObjectId;
use micropm_layout::Page;
use std::io::Write;

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Calls must follow the order `begin_document`, then `render_page_content`
/// and `write_page_object` once per page, then `finish`.
pub trait DocumentRenderer<W: Write + Send> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError>;

    /// Encodes the text of `page` into a content stream.
    fn render_page_content(&mut self, page: &Page) -> Result<ObjectId, RenderError>;

    fn write_page_object(
        &mut self,
        content_stream_id: ObjectId,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError>;

    /// Writes the page tree and trailer, returning the writer.
    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;
}
