use crate::error::PipelineError;
use crate::export::SlugStyle;
use micropm_layout::LayoutConfig;
use micropm_style::ExportStylesheet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming a JSON file with [`ExportConfig`] overrides.
pub const CONFIG_ENV_VAR: &str = "MICROPM_CONFIG";

/// Everything that can be tuned about an export. Any subset may be given in JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    pub slug_style: SlugStyle,
    /// `[program, args...]` used for clipboard copies. The platform default
    /// command is used when unset.
    pub clipboard_command: Option<Vec<String>>,
    pub layout: LayoutConfig,
    pub stylesheet: ExportStylesheet,
}

impl ExportConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&source)
    }

    /// Loads the file named by `MICROPM_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, PipelineError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
