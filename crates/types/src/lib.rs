pub mod document;

pub use document::{Document, EMPTY_SECTION_PLACEHOLDER, Field, Record, RecordCollection, Section};
