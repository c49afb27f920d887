//! Append-to-file strategy.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};

use super::{OutputStrategy, stdout_target, write_to};
use crate::error::OutputError;
use crate::io::{FileOutput, OutputTarget};

/// File used when no path is given.
pub const DEFAULT_FILE_PATH: &str = "salida.txt";

/// Appends each message as one line to a text file, then confirms on the
/// console.
///
/// The file is opened in append mode (created if missing) and closed again
/// on every call; existing content is never truncated.
#[derive(Debug, Clone)]
pub struct FileStrategy {
    file: FileOutput,
    console: Arc<dyn OutputTarget>,
}

impl FileStrategy {
    /// Create a strategy appending to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FileOutput::new(path),
            console: stdout_target(),
        }
    }

    /// Create a strategy appending to `path`, or to `salida.txt` when `None`.
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::new(path),
            None => Self::default(),
        }
    }

    /// Print the confirmation line to `console` instead of stdout.
    pub fn with_console(mut self, console: Arc<dyn OutputTarget>) -> Self {
        self.console = console;
        self
    }

    /// Target file path.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Default for FileStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PATH)
    }
}

impl OutputStrategy for FileStrategy {
    fn display(&self, message: &str) -> Result<(), OutputError> {
        let line = format!("{message}\n");
        if let Err(e) = write_to(&self.file, line.as_bytes()) {
            warn!("append to {} failed: {}", self.file.id(), e.source);
            return Err(e);
        }
        debug!("appended {} bytes to {}", line.len(), self.file.id());

        let confirmation = format!("Mensaje guardado en {}\n", self.file.id());
        write_to(self.console.as_ref(), confirmation.as_bytes())
    }
}
