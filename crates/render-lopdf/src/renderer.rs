use crate::helpers;
use crate::writer::PdfWriter;
use lopdf::{Dictionary, Object, ObjectId, dictionary};
use log::debug;
use micropm_layout::{LayoutEngine, Page};
use micropm_render_core::utils::{font_resource_name, mm_to_pt};
use micropm_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use micropm_style::BuiltinFont;
use std::io::Write;

/// A PDF renderer using the `lopdf` library.
pub struct LopdfRenderer<W: Write + Send> {
    writer: Option<PdfWriter<W>>,
    fonts: &'static [BuiltinFont],
}

impl<W: Write + Send> LopdfRenderer<W> {
    pub fn new(layout_engine: &LayoutEngine) -> Self {
        Self {
            writer: None,
            fonts: layout_engine.registered_fonts(),
        }
    }

    fn writer_mut(&mut self) -> Result<&mut PdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or(RenderError::InvalidState("document not started"))
    }
}

impl<W: Write + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError> {
        let mut font_dict = Dictionary::new();
        for font in self.fonts {
            font_dict.set(
                font_resource_name(*font),
                Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.postscript_name(),
                    "Encoding" => "WinAnsiEncoding",
                }),
            );
        }

        self.writer = Some(PdfWriter::new(writer, "1.7", font_dict, info));
        Ok(())
    }

    fn render_page_content(&mut self, page: &Page) -> Result<ObjectId, RenderError> {
        let content = helpers::render_page_to_content(page);
        self.writer_mut()?.write_content_stream(content)
    }

    fn write_page_object(
        &mut self,
        content_stream_id: ObjectId,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
            "Contents" => content_stream_id,
            "Resources" => writer.resources_id,
        };
        Ok(writer.write_object(page_dict.into()))
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        match renderer.writer.take() {
            Some(writer) => writer.finish(page_ids),
            None => Err(RenderError::InvalidState(
                "document not started or already finished",
            )),
        }
    }
}

/// Encodes laid-out pages as a complete PDF file in memory.
pub fn render_pages(
    layout_engine: &LayoutEngine,
    pages: &[Page],
    info: &DocumentInfo,
) -> Result<Vec<u8>, RenderError> {
    let mut renderer: Box<LopdfRenderer<Vec<u8>>> = Box::new(LopdfRenderer::new(layout_engine));
    renderer.begin_document(Vec::new(), info)?;

    let mut page_ids = Vec::with_capacity(pages.len());
    for page in pages {
        let content_id = renderer.render_page_content(page)?;
        let page_id = renderer.write_page_object(
            content_id,
            mm_to_pt(page.width),
            mm_to_pt(page.height),
        )?;
        page_ids.push(page_id);
    }

    let bytes = renderer.finish(page_ids)?;
    debug!("Encoded {} page(s) into {} bytes", pages.len(), bytes.len());
    Ok(bytes)
}
