pub mod dimension;
pub mod font;
pub mod stylesheet;
pub mod text;

pub use dimension::{MM_PER_PT, PageSize, PT_PER_MM};
pub use font::{BuiltinFont, FontWeight};
pub use stylesheet::ExportStylesheet;
pub use text::TextStyle;
