use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error while writing the PDF: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF encoding failed: {0}")]
    Pdf(String),
    #[error("Renderer used out of order: {0}")]
    InvalidState(&'static str),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
