use log::{debug, warn};
use micropm_traits::{Clipboard, ClipboardError, ExportSink, SinkError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Writes each export as a file inside one directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates the directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, SinkError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ExportSink for DirectorySink {
    fn write(&self, filename: &str, content_type: &str, bytes: &[u8]) -> Result<(), SinkError> {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename == ".." {
            return Err(SinkError::InvalidTarget(format!(
                "'{filename}' is not a plain file name"
            )));
        }
        let path = self.root.join(filename);
        fs::write(&path, bytes).map_err(|e| SinkError::WriteFailed {
            filename: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!("Wrote {} bytes of {} to {}", bytes.len(), content_type, path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DirectorySink"
    }
}

/// Copies text by piping it into a platform clipboard command such as
/// `pbcopy` or `xclip -selection clipboard`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Builds a clipboard from `[program, args...]`. Returns `None` for an empty command.
    pub fn from_command_line(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    /// The usual clipboard command for the current platform.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if cfg!(target_os = "windows") {
            Self::new("clip", Vec::new())
        } else {
            Self::new("xclip", vec!["-selection".to_string(), "clipboard".to_string()])
        }
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::Unavailable(format!("{}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                // The child is reaped before the error is reported.
                let _ = child.kill();
                let _ = child.wait();
                return Err(ClipboardError::WriteFailed(e.to_string()));
            }
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        if !status.success() {
            warn!("Clipboard command '{}' exited with {}", self.program, status);
            return Err(ClipboardError::WriteFailed(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "CommandClipboard"
    }
}
