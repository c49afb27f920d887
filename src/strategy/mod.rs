//! Output strategies.
//!
//! This module provides:
//! - `OutputStrategy`: The single capability every strategy implements
//! - `ConsoleStrategy`: Prefixed line on the console
//! - `JsonStrategy`: Pretty-printed `{"mensaje": ...}` object on the console
//! - `FileStrategy`: Line appended to a text file, plus a console confirmation
//!
//! Adding a new sink means adding a new `OutputStrategy` implementor;
//! `MessageContext` never needs to change.

use std::fmt::Debug;
use std::io::Write;
use std::sync::Arc;

mod console;
mod file;
#[cfg(feature = "json")]
mod json;

pub use console::{CONSOLE_PREFIX, ConsoleStrategy};
pub use file::{DEFAULT_FILE_PATH, FileStrategy};
#[cfg(feature = "json")]
pub use json::{JSON_KEY, JsonStrategy};

use crate::error::OutputError;
use crate::io::{OutputTarget, StdoutOutput};

/// An interchangeable way of showing a message.
pub trait OutputStrategy: Send + Sync + Debug {
    /// Show `message` on this strategy's sink.
    ///
    /// Failures of the underlying sink are returned, never swallowed.
    fn display(&self, message: &str) -> Result<(), OutputError>;
}

impl<S: OutputStrategy + ?Sized> OutputStrategy for Box<S> {
    fn display(&self, message: &str) -> Result<(), OutputError> {
        (**self).display(message)
    }
}

impl<S: OutputStrategy + ?Sized> OutputStrategy for Arc<S> {
    fn display(&self, message: &str) -> Result<(), OutputError> {
        (**self).display(message)
    }
}

pub(crate) fn stdout_target() -> Arc<dyn OutputTarget> {
    Arc::new(StdoutOutput::new())
}

/// Open `target`, write `bytes` in one call, flush, and drop the handle.
pub(crate) fn write_to(target: &dyn OutputTarget, bytes: &[u8]) -> Result<(), OutputError> {
    let mut writer = target
        .open_append()
        .map_err(|e| OutputError::open(target.id(), e))?;
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| OutputError::write(target.id(), e))
}
