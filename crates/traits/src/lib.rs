pub mod clipboard;
pub mod sink;

pub use clipboard::{Clipboard, ClipboardError, InMemoryClipboard};
pub use sink::{ExportSink, MemorySink, SinkError, StoredFile};
