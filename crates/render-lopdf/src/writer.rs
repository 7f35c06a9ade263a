use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use micropm_render_core::{DocumentInfo, RenderError};
use std::io::Write;

use crate::helpers::encode_win_ansi;

/// Builds the PDF object graph in memory and serializes it on [`finish`](PdfWriter::finish).
pub struct PdfWriter<W: Write> {
    writer: W,
    document: Document,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W, version: &str, font_dict: Dictionary, info: &DocumentInfo) -> Self {
        let mut document = Document::with_version(version);
        let pages_id = document.new_object_id();
        let resources_id = document.add_object(dictionary! { "Font" => font_dict });

        let mut info_dict = dictionary! {
            "Title" => Object::String(encode_win_ansi(&info.title), StringFormat::Literal),
            "Producer" => Object::String(encode_win_ansi(&info.producer), StringFormat::Literal),
        };
        if let Some(author) = &info.author {
            info_dict.set(
                "Author",
                Object::String(encode_win_ansi(author), StringFormat::Literal),
            );
        }
        let info_id = document.add_object(info_dict);
        document.trailer.set("Info", info_id);

        Self {
            writer,
            document,
            pages_id,
            resources_id,
        }
    }

    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let bytes = content.encode()?;
        Ok(self.document.add_object(Stream::new(dictionary! {}, bytes)))
    }

    pub fn write_object(&mut self, object: Object) -> ObjectId {
        self.document.add_object(object)
    }

    /// Writes the page tree, catalog and trailer, then serializes the document.
    pub fn finish(mut self, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let count = page_ids.len() as i64;
        let kids: Vec<Object> = page_ids.into_iter().map(Object::Reference).collect();
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        self.document.save_to(&mut self.writer)?;
        Ok(self.writer)
    }
}
