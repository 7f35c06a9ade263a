//! Clipboard trait for copying exported text.

use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write rejected: {0}")]
    WriteFailed(String),
}

/// A system clipboard that accepts plain text.
///
/// A write either succeeds or fails once; callers do not retry.
pub trait Clipboard: Send + Sync + Debug {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Returns a human-readable name for this clipboard (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A clipboard held in memory. The last write wins.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    contents: RwLock<Option<String>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, or `None` if nothing was copied or the lock is poisoned.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok()?.clone()
    }
}

impl Clipboard for InMemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .write()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "InMemoryClipboard"
    }
}
