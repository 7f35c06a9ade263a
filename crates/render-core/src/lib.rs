//! Core rendering abstractions for PDF export.
//!
//! This crate provides the pieces shared by PDF backends:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - Error types for rendering operations
//! - Unit conversion and font naming helpers

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
pub use types::DocumentInfo;
