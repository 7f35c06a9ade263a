use crate::font::{BuiltinFont, FontWeight};
use serde::{Deserialize, Serialize};

/// Font size (in points) and weight of a run of text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: f32,
    #[serde(default)]
    pub weight: FontWeight,
}

impl TextStyle {
    pub const fn regular(font_size: f32) -> Self {
        Self {
            font_size,
            weight: FontWeight::Regular,
        }
    }

    pub const fn bold(font_size: f32) -> Self {
        Self {
            font_size,
            weight: FontWeight::Bold,
        }
    }

    pub fn font(&self) -> BuiltinFont {
        BuiltinFont::for_weight(self.weight)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::regular(12.0)
    }
}
