//! ExportSink trait for abstracting artifact delivery.
//!
//! This trait lets the export pipeline hand a finished file to the user
//! without knowing whether it ends up on disk, in memory, or in a browser
//! download.

use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for artifact delivery.
#[derive(Error, Debug, Clone)]
pub enum SinkError {
    #[error("Failed to write '{filename}': {message}")]
    WriteFailed { filename: String, message: String },

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::Io(err.to_string())
    }
}

/// A destination for exported files.
///
/// # Implementations
///
/// - `MemorySink`: keeps every file in memory (always available)
/// - `DirectorySink` in the `micropm` crate: writes into a directory
pub trait ExportSink: Send + Sync + Debug {
    /// Deliver `bytes` under `filename`, tagged with its MIME type.
    fn write(&self, filename: &str, content_type: &str, bytes: &[u8]) -> Result<(), SinkError>;

    /// Returns a human-readable name for this sink (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A file delivered to a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// An in-memory sink recording deliveries in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: RwLock<Vec<StoredFile>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent delivery under `filename`.
    ///
    /// Returns `None` if the lock is poisoned or nothing was delivered.
    pub fn get(&self, filename: &str) -> Option<StoredFile> {
        self.files
            .read()
            .ok()?
            .iter()
            .rev()
            .find(|f| f.filename == filename)
            .cloned()
    }

    /// All deliveries in the order they arrived.
    pub fn files(&self) -> Vec<StoredFile> {
        self.files.read().map(|f| f.clone()).unwrap_or_default()
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.files.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ExportSink for MemorySink {
    fn write(&self, filename: &str, content_type: &str, bytes: &[u8]) -> Result<(), SinkError> {
        let mut files = self.files.write().map_err(|_| SinkError::WriteFailed {
            filename: filename.to_string(),
            message: "sink lock poisoned".to_string(),
        })?;
        files.push(StoredFile {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }

    fn name(&self) -> &'static str {
        "MemorySink"
    }
}
