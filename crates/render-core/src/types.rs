/// Values written to the PDF `Info` dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: Option<String>,
    pub producer: String,
}

impl DocumentInfo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            producer: concat!("micropm ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        let author = author.into();
        self.author = (!author.is_empty()).then_some(author);
        self
    }
}
