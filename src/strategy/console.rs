//! Plain console strategy.

use std::sync::Arc;

use super::{OutputStrategy, stdout_target, write_to};
use crate::error::OutputError;
use crate::io::OutputTarget;

/// Prefix written before every message.
pub const CONSOLE_PREFIX: &str = "Consola: ";

/// Writes `Consola: <message>` as one line to the console.
#[derive(Debug, Clone)]
pub struct ConsoleStrategy {
    console: Arc<dyn OutputTarget>,
}

impl ConsoleStrategy {
    /// Create a strategy that prints to stdout.
    pub fn new() -> Self {
        Self {
            console: stdout_target(),
        }
    }

    /// Print to `console` instead of stdout.
    pub fn with_console(mut self, console: Arc<dyn OutputTarget>) -> Self {
        self.console = console;
        self
    }
}

impl Default for ConsoleStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStrategy for ConsoleStrategy {
    fn display(&self, message: &str) -> Result<(), OutputError> {
        let line = format!("{CONSOLE_PREFIX}{message}\n");
        write_to(self.console.as_ref(), line.as_bytes())
    }
}
