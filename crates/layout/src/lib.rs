//! Paginated layout for exported documents.
//!
//! The engine walks a [`Document`](micropm_types::Document) once, top to bottom,
//! keeping a single vertical cursor. Wrapped text is measured with the
//! Helvetica metrics in [`fonts`] and a page break is inserted *before* any
//! block that would cross the page's usable height.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
    #[error("Threshold '{name}' of {value:.2} lies outside the writable band {top:.2}..{limit:.2}.")]
    ThresholdOutOfRange {
        name: &'static str,
        value: f32,
        top: f32,
        limit: f32,
    },
}

pub(crate) mod engine;
pub use self::engine::LayoutEngine;

mod elements;
mod page;
pub mod config;
pub mod fonts;

pub mod algorithms;
pub mod text;

pub use self::config::LayoutConfig;
pub use self::elements::{BlockKind, PositionedElement, TextElement};
pub use self::fonts::FontLibrary;
pub use self::page::Page;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod text_test;
