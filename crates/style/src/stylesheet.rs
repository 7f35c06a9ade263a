//! The fixed set of text styles used when laying out an exported document.

use super::dimension::PageSize;
use super::text::TextStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportStylesheet {
    pub page_size: PageSize,
    pub title: TextStyle,
    pub metadata: TextStyle,
    pub section_heading: TextStyle,
    pub body: TextStyle,
    pub record_list_heading: TextStyle,
    pub record_heading: TextStyle,
    pub attribute: TextStyle,
}

impl Default for ExportStylesheet {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            title: TextStyle::regular(24.0),
            metadata: TextStyle::regular(12.0),
            section_heading: TextStyle::bold(16.0),
            body: TextStyle::regular(12.0),
            record_list_heading: TextStyle::bold(16.0),
            record_heading: TextStyle::bold(14.0),
            attribute: TextStyle::regular(12.0),
        }
    }
}
