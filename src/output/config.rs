//! Output configuration types

use crate::select::SortKey;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Attribute shown in the first column of each line
    pub key: SortKey,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            key: SortKey::default(),
        }
    }
}
