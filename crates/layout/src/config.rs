use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// Page constants for the exporter, in millimetres.
///
/// The defaults are the values every exported PDF has always been laid out
/// with; changing them changes where page breaks fall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// First write position on every page.
    pub top_margin: f32,
    /// A wrapped block may not end below this line.
    pub usable_height: f32,
    /// Left edge of every text block.
    pub left_margin: f32,
    /// Maximum width of a wrapped line.
    pub wrap_width: f32,
    /// Vertical advance per wrapped line.
    pub line_pitch: f32,

    pub title_advance: f32,
    pub metadata_line_advance: f32,
    pub metadata_block_gap: f32,
    pub section_heading_advance: f32,
    pub section_body_gap: f32,

    /// The record-list heading moves to a new page when the cursor is below this.
    pub record_list_threshold: f32,
    pub record_list_heading_advance: f32,
    /// Each record moves to a new page when the cursor is below this.
    pub record_threshold: f32,
    pub record_heading_advance: f32,
    pub record_attribute_advance: f32,
    pub record_body_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_margin: 20.0,
            usable_height: 280.0,
            left_margin: 15.0,
            wrap_width: 180.0,
            line_pitch: 7.0,
            title_advance: 15.0,
            metadata_line_advance: 8.0,
            metadata_block_gap: 15.0,
            section_heading_advance: 10.0,
            section_body_gap: 15.0,
            record_list_threshold: 230.0,
            record_list_heading_advance: 10.0,
            record_threshold: 250.0,
            record_heading_advance: 8.0,
            record_attribute_advance: 6.0,
            record_body_gap: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Rejects configurations the single-pass cursor cannot honour.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.wrap_width <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "wrap width must be positive, got {}",
                self.wrap_width
            )));
        }
        if self.line_pitch <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "line pitch must be positive, got {}",
                self.line_pitch
            )));
        }
        if self.top_margin < 0.0 || self.top_margin >= self.usable_height {
            return Err(LayoutError::InvalidConfig(format!(
                "top margin {} must lie above the usable height {}",
                self.top_margin, self.usable_height
            )));
        }
        for (name, value) in [
            ("recordListThreshold", self.record_list_threshold),
            ("recordThreshold", self.record_threshold),
        ] {
            if value < self.top_margin || value > self.usable_height {
                return Err(LayoutError::ThresholdOutOfRange {
                    name,
                    value,
                    top: self.top_margin,
                    limit: self.usable_height,
                });
            }
        }
        Ok(())
    }

    /// Height of `lines` wrapped lines.
    pub fn block_height(&self, lines: usize) -> f32 {
        lines as f32 * self.line_pitch
    }
}
