//! Export artifacts, filenames and the concrete delivery targets.

mod artifact;
mod filename;
mod sinks;

pub use artifact::{ExportFormat, ExportedDocument};
pub use filename::{SlugStyle, export_filename};
pub use sinks::{CommandClipboard, DirectorySink};
