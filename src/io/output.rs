//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// A destination that strategies write their output to.
///
/// Targets are opened once per display call and dropped when the call
/// returns, so no handle outlives a single message.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Open the target for appending to existing content.
    fn open_append(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
