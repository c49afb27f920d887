//! Declarative strategy descriptions.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::io::OutputTarget;
use crate::strategy::{ConsoleStrategy, FileStrategy, OutputStrategy};
#[cfg(feature = "json")]
use crate::strategy::JsonStrategy;

/// Description of an output strategy, as found in a serialized document.
///
/// ```json
/// {"kind": "file", "path": "log.txt"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StrategySpec {
    /// `ConsoleStrategy`
    Console,
    /// `JsonStrategy`
    #[cfg(feature = "json")]
    Json,
    /// `FileStrategy`, appending to `path` or to `salida.txt`
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
    },
}

impl StrategySpec {
    /// Parse a short form: `console`, `json`, `file` or `file:<path>`.
    pub fn parse(s: &str) -> Option<Self> {
        let (kind, arg) = match s.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (s, None),
        };
        match (kind.to_ascii_lowercase().as_str(), arg) {
            ("console" | "consola", None) => Some(StrategySpec::Console),
            #[cfg(feature = "json")]
            ("json", None) => Some(StrategySpec::Json),
            ("file" | "txt", None) => Some(StrategySpec::File { path: None }),
            ("file" | "txt", Some(path)) if !path.is_empty() => Some(StrategySpec::File {
                path: Some(PathBuf::from(path)),
            }),
            _ => None,
        }
    }

    /// Build the described strategy, printing to stdout.
    pub fn build(&self) -> Box<dyn OutputStrategy> {
        match self {
            StrategySpec::Console => Box::new(ConsoleStrategy::new()),
            #[cfg(feature = "json")]
            StrategySpec::Json => Box::new(JsonStrategy::new()),
            StrategySpec::File { path } => Box::new(FileStrategy::from_option(path.clone())),
        }
    }

    /// Build the described strategy, printing to `console` instead of stdout.
    pub fn build_with_console(&self, console: Arc<dyn OutputTarget>) -> Box<dyn OutputStrategy> {
        match self {
            StrategySpec::Console => Box::new(ConsoleStrategy::new().with_console(console)),
            #[cfg(feature = "json")]
            StrategySpec::Json => Box::new(JsonStrategy::new().with_console(console)),
            StrategySpec::File { path } => {
                Box::new(FileStrategy::from_option(path.clone()).with_console(console))
            }
        }
    }
}
