//! Sinks that strategies write to.
//!
//! This module provides:
//! - `OutputTarget`: Trait for output destinations
//! - `StdoutOutput` and `FileOutput` for the process's real sinks
//! - `InMemorySink` for capturing output in tests

mod memory;
mod output;
mod std_io;

pub use memory::InMemorySink;
pub use output::OutputTarget;
pub use std_io::{FileOutput, StdoutOutput};
