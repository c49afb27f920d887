//! Error types for strategio output operations.
//!
//! There is a single failure kind, an I/O failure, reported as `OutputError`
//! together with the `Stage` where it happened and the target it concerned.

use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the sink (file or stream)
    Open,
    /// Error while writing or flushing the sink
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// An I/O failure raised while displaying a message.
#[derive(Debug, Error)]
#[error("[{stage}] {target}: {source}")]
pub struct OutputError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the target (file path, "-" for stdout, etc.)
    pub target: String,
    /// The underlying error
    #[source]
    pub source: io::Error,
}

impl OutputError {
    pub fn open(target: impl Into<String>, source: io::Error) -> Self {
        Self {
            stage: Stage::Open,
            target: target.into(),
            source,
        }
    }

    pub fn write(target: impl Into<String>, source: io::Error) -> Self {
        Self {
            stage: Stage::Write,
            target: target.into(),
            source,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
