//! Directory walking
//!
//! The walker turns root paths into a deterministic stream of entries:
//!
//! - `config` - walker settings and duration parsing for time filters
//! - `filter` - hidden-name, ignore-pattern and time-window checks
//! - `report` - the per-node `WalkAction` and error reporters
//! - `traverser` - the recursive walk itself

mod config;
mod filter;
mod report;
mod traverser;

pub use config::{WalkerConfig, parse_duration_string, parse_time_bound};
pub use filter::{EntryFilter, is_hidden};
pub use report::{ErrorReporter, StderrReporter, WalkAction};
pub use traverser::Traverser;
