//! # strategio
//!
//! Interchangeable message output strategies behind a single context.
//!
//! ## Overview
//!
//! strategio provides:
//! - **One capability**: every strategy implements `OutputStrategy::display`
//! - **Three sinks**: `ConsoleStrategy`, `JsonStrategy` and `FileStrategy`
//! - **A context**: `MessageContext` owns the active strategy and forwards
//!   messages to it, and the strategy can be swapped at any time
//! - **Pluggable targets**: console output goes through `OutputTarget`, so it
//!   can be captured with `InMemorySink`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strategio::{ConsoleStrategy, FileStrategy, JsonStrategy, MessageContext};
//!
//! fn main() -> Result<(), strategio::OutputError> {
//!     let mut context = MessageContext::new(ConsoleStrategy::new());
//!     context.show_message("hola")?;          // Consola: hola
//!
//!     context.set_strategy(JsonStrategy::new());
//!     context.show_message("hola")?;          // { "mensaje": "hola" }
//!
//!     context.set_strategy(FileStrategy::default());
//!     context.show_message("hola")?;          // appended to salida.txt
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - `JsonStrategy` (enabled by default)
//! - `miette` - Pretty error reporting with miette

pub mod config;
pub mod context;
pub mod error;
pub mod io;
pub mod strategy;

pub use config::StrategySpec;
pub use context::MessageContext;
pub use error::{OutputError, Stage};
pub use io::{FileOutput, InMemorySink, OutputTarget, StdoutOutput};
#[cfg(feature = "json")]
pub use strategy::JsonStrategy;
pub use strategy::{ConsoleStrategy, FileStrategy, OutputStrategy};

#[cfg(feature = "miette")]
pub use error::OutputDiagnostic;
