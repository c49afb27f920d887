//! Serializable descriptions of output strategies.

mod spec;

pub use spec::StrategySpec;
