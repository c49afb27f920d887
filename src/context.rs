//! The context that delegates message display to its active strategy.

use log::debug;

use crate::error::OutputError;
use crate::strategy::OutputStrategy;

/// Holds exactly one active `OutputStrategy` and forwards messages to it.
///
/// There is no way to build a context without a strategy or to clear it;
/// `set_strategy` only ever replaces one strategy with another.
#[derive(Debug)]
pub struct MessageContext {
    strategy: Box<dyn OutputStrategy>,
}

impl MessageContext {
    /// Create a context with its initial strategy.
    pub fn new<S: OutputStrategy + 'static>(strategy: S) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Replace the active strategy. The previous one is dropped.
    pub fn set_strategy<S: OutputStrategy + 'static>(&mut self, strategy: S) {
        debug!("output strategy {:?} replaced by {:?}", self.strategy, strategy);
        self.strategy = Box::new(strategy);
    }

    /// Borrow the active strategy.
    pub fn strategy(&self) -> &dyn OutputStrategy {
        self.strategy.as_ref()
    }

    /// Forward `message` unchanged to the active strategy.
    pub fn show_message(&self, message: &str) -> Result<(), OutputError> {
        self.strategy.display(message)
    }
}
