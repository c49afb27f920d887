//! JSON console strategy.

use std::io;
use std::sync::Arc;

use serde::Serialize;

use super::{OutputStrategy, stdout_target, write_to};
use crate::error::OutputError;
use crate::io::OutputTarget;

/// The only key of the emitted JSON object.
pub const JSON_KEY: &str = "mensaje";

#[derive(Serialize)]
struct Envelope<'a> {
    mensaje: &'a str,
}

/// Writes `{"mensaje": <message>}` as pretty-printed JSON to the console.
#[derive(Debug, Clone)]
pub struct JsonStrategy {
    console: Arc<dyn OutputTarget>,
}

impl JsonStrategy {
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

impl Default for JsonStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStrategy for JsonStrategy {
    fn display(&self, message: &str) -> Result<(), OutputError> {
        // Serializing a struct of one string field only fails on I/O.
        let mut body = serde_json::to_vec_pretty(&Envelope { mensaje: message })
            .map_err(|e| OutputError::write(self.console.id(), io::Error::from(e)))?;
        body.push(b'\n');
        write_to(self.console.as_ref(), &body)
    }
}
