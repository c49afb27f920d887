//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{OutputError, Stage};

/// A diagnostic wrapper for output errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct OutputDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<OutputError> for OutputDiagnostic {
    fn from(e: OutputError) -> Self {
        let help = match e.stage {
            Stage::Open => "Check that the target path exists and is writable",
            Stage::Write => "Check free disk space and that the output stream is still open",
        };
        OutputDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            source: Some(Box::new(e.source)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<OutputError> for miette::Report {
    fn from(e: OutputError) -> Self {
        miette::Report::new(OutputDiagnostic::from(e))
    }
}
