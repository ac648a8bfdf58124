//! ftop - find the largest, newest or first-named files under a set of roots

pub mod entry;
pub mod error;
pub mod output;
pub mod select;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::Entry;
pub use error::{ConfigError, WalkError};
pub use output::{JsonReport, OutputConfig, TextFormatter, print_json};
pub use select::{EntrySink, OrderingPolicy, SortKey, TopKSelector, Totals};
pub use walk::{ErrorReporter, StderrReporter, Traverser, WalkAction, WalkerConfig};
